use crate::record::PremiumRecord;

/// Proposition 3 - Premium with Financial & Commercial Insights, all sectors.
pub(crate) static RECORDS: [PremiumRecord; 20] = [
    PremiumRecord {
        customer_name: "John Smith",
        company_name: "Global Bank Corp",
        company_size: "Large Enterprise",
        industry_area: "Banking, Financial and Insurance (BFSI)",
        annual_revenue: "$2.5B",
        geographics_footprint: "North America, Europe, Asia",
        key_contact: "Michael Roberts",
        designation: "CIO",
        email_address: "michael.roberts@globalbank.com",
        phone_whatsapp: "+1-555-0101",
        linkedin_profile: "linkedin.com/in/michaelroberts",
        website_url: "www.globalbank.com",
        number_of_endpoints: "2500",
        number_of_servers: "150 (80 physical, 70 virtual)",
        cloud_footprint: "Azure - 200 VMs, AWS - 50 instances",
        data_center_details: "3 on-prem data centers + Azure cloud",
        network_size: "50 routers, 200 switches, 25 firewalls, MPLS network",
        existing_security_stack: "CrowdStrike EDR, Palo Alto Firewalls, Splunk SIEM",
        it_budget_approx: "$45M annually",
        existing_msp_vendor: "TCS for infrastructure support",
        current_slas_and_support_hours: "24x7 support, 15-min response time",
        pain_points_with_existing_it: "High costs, slow incident response, compliance challenges",
        average_downtime_incidents: "8 incidents/month, avg 2 hours downtime",
        existing_monitoring_tools: "SolarWinds, Nagios, Splunk",
        current_it_spend: "$42M OPEX, $8M CAPEX annually",
        current_msp_contract_value: "$15M/year with TCS",
        pricing_preferences: "Outcome-based, SLA-driven pricing",
        renewal_contract_timeline: "Contract renewal in Q2 2026",
        budget_available_for_outsourcing: "$18M for enhanced managed services",
        customer_benchmarking_summary: "Above industry average on security spend, below on automation. Opportunity for modernization and cloud optimization.",
        additional_commercial_notes: "Open to strategic partnerships. Interested in AI-driven security operations and automation.",
    },
    PremiumRecord {
        customer_name: "Sarah Johnson",
        company_name: "SkyHigh Airlines",
        company_size: "Large Enterprise",
        industry_area: "Airline Industry",
        annual_revenue: "$1.8B",
        geographics_footprint: "Global - 50+ countries",
        key_contact: "David Patterson",
        designation: "VP IT Operations",
        email_address: "david.patterson@skyhigh.com",
        phone_whatsapp: "+1-555-0102",
        linkedin_profile: "linkedin.com/in/davidpatterson",
        website_url: "www.skyhigh.com",
        number_of_endpoints: "3500",
        number_of_servers: "200 (100 physical, 100 virtual)",
        cloud_footprint: "AWS - 300 instances, GCP - 100 instances",
        data_center_details: "2 primary data centers + multi-cloud",
        network_size: "80 routers, 300 switches, 40 firewalls, SD-WAN",
        existing_security_stack: "Sentinel One, Fortinet Firewalls, IBM QRadar",
        it_budget_approx: "$55M annually",
        existing_msp_vendor: "Accenture for managed services",
        current_slas_and_support_hours: "24x7 global support, 10-min critical response",
        pain_points_with_existing_it: "Multi-vendor complexity, integration issues, limited proactive support",
        average_downtime_incidents: "12 incidents/month, avg 1.5 hours downtime",
        existing_monitoring_tools: "Datadog, New Relic, IBM QRadar",
        current_it_spend: "$52M OPEX, $12M CAPEX annually",
        current_msp_contract_value: "$22M/year with Accenture",
        pricing_preferences: "Fixed monthly pricing with volume discounts",
        renewal_contract_timeline: "Contract up for renewal in Q4 2025",
        budget_available_for_outsourcing: "$25M for consolidated managed services",
        customer_benchmarking_summary: "High IT complexity due to global operations. Significant opportunity for vendor consolidation and cost optimization.",
        additional_commercial_notes: "Evaluating consolidated MSP model. Priority on 24x7 global support and multi-cloud management.",
    },
    PremiumRecord {
        customer_name: "Dr. Michael Chen",
        company_name: "HealthCare Plus",
        company_size: "Large Enterprise",
        industry_area: "Healthcare, Pharmaceuticals & Life Sciences",
        annual_revenue: "$3.2B",
        geographics_footprint: "USA, Canada",
        key_contact: "Dr. Rachel Foster",
        designation: "Chief Technology Officer",
        email_address: "rachel.foster@healthcareplus.com",
        phone_whatsapp: "+1-555-0103",
        linkedin_profile: "linkedin.com/in/rachelfoster",
        website_url: "www.healthcareplus.com",
        number_of_endpoints: "5000",
        number_of_servers: "300 (150 physical, 150 virtual)",
        cloud_footprint: "Azure - 400 VMs (HIPAA compliant)",
        data_center_details: "4 HIPAA-compliant data centers + Azure healthcare",
        network_size: "120 routers, 400 switches, 60 firewalls, private WAN",
        existing_security_stack: "Microsoft Defender, Cisco Firepower, Azure Sentinel",
        it_budget_approx: "$85M annually",
        existing_msp_vendor: "Optum for healthcare IT services",
        current_slas_and_support_hours: "24x7 support, 5-min critical response for clinical systems",
        pain_points_with_existing_it: "HIPAA compliance overhead, EMR integration challenges, clinical downtime risks",
        average_downtime_incidents: "6 incidents/month, avg 45 min downtime (critical for clinical ops)",
        existing_monitoring_tools: "Azure Monitor, PRTG, Epic monitoring tools",
        current_it_spend: "$78M OPEX, $18M CAPEX annually",
        current_msp_contract_value: "$32M/year with Optum",
        pricing_preferences: "Value-based, compliance-focused pricing",
        renewal_contract_timeline: "Contract renewal in Q1 2026",
        budget_available_for_outsourcing: "$40M for enhanced healthcare IT managed services",
        customer_benchmarking_summary: "High compliance requirements. Strong focus on clinical uptime. Opportunity for advanced healthcare IT automation and AI diagnostics support.",
        additional_commercial_notes: "Strategic priority on telehealth infrastructure and patient data analytics. Requires HIPAA-certified MSP with healthcare expertise.",
    },
    PremiumRecord {
        customer_name: "Robert Anderson",
        company_name: "TechManufacture Inc",
        company_size: "Large Enterprise",
        industry_area: "Manufacturing",
        annual_revenue: "$1.5B",
        geographics_footprint: "North America, Mexico",
        key_contact: "James Mitchell",
        designation: "IT Director",
        email_address: "james.mitchell@techmanufacture.com",
        phone_whatsapp: "+1-555-0104",
        linkedin_profile: "linkedin.com/in/jamesmitchell",
        website_url: "www.techmanufacture.com",
        number_of_endpoints: "1800",
        number_of_servers: "120 (70 physical, 50 virtual)",
        cloud_footprint: "AWS - 80 instances",
        data_center_details: "2 on-prem data centers + AWS cloud",
        network_size: "40 routers, 150 switches, 20 firewalls, OT network",
        existing_security_stack: "Trend Micro, Fortinet, SCADA security tools",
        it_budget_approx: "$28M annually",
        existing_msp_vendor: "Siemens for OT support, HCL for IT",
        current_slas_and_support_hours: "24x6 support, 30-min response time",
        pain_points_with_existing_it: "OT/IT convergence challenges, production downtime, legacy systems",
        average_downtime_incidents: "10 incidents/month, avg 3 hours (impacts production)",
        existing_monitoring_tools: "Siemens monitoring, Zabbix, AWS CloudWatch",
        current_it_spend: "$24M OPEX, $6M CAPEX annually",
        current_msp_contract_value: "$12M/year (split between Siemens and HCL)",
        pricing_preferences: "Production uptime guarantees, outcome-based pricing",
        renewal_contract_timeline: "Siemens contract renewal Q3 2025, HCL in Q1 2026",
        budget_available_for_outsourcing: "$16M for unified IT/OT managed services",
        customer_benchmarking_summary: "OT/IT convergence is key pain point. Significant opportunity for unified managed services with Industry 4.0 capabilities.",
        additional_commercial_notes: "Looking for single MSP for both IT and OT. Priority on predictive maintenance and IoT integration for smart manufacturing.",
    },
    PremiumRecord {
        customer_name: "Emily Davis",
        company_name: "ShopSmart Retail",
        company_size: "Large Enterprise",
        industry_area: "Retail & E-commerce",
        annual_revenue: "$4.5B",
        geographics_footprint: "USA - 500 stores",
        key_contact: "Brian Cooper",
        designation: "VP Technology",
        email_address: "brian.cooper@shopsmart.com",
        phone_whatsapp: "+1-555-0105",
        linkedin_profile: "linkedin.com/in/briancooper",
        website_url: "www.shopsmart.com",
        number_of_endpoints: "8000",
        number_of_servers: "250 (100 physical, 150 virtual)",
        cloud_footprint: "AWS - 500 instances, Azure - 200 VMs",
        data_center_details: "3 regional data centers + multi-cloud",
        network_size: "200 routers, 600 switches (stores), 80 firewalls, SD-WAN",
        existing_security_stack: "McAfee EDR, Cisco ASA, Splunk",
        it_budget_approx: "$95M annually",
        existing_msp_vendor: "Wipro for store IT support",
        current_slas_and_support_hours: "24x7 support, 20-min response for POS systems",
        pain_points_with_existing_it: "Store IT management complexity, POS downtime, omnichannel integration",
        average_downtime_incidents: "25 incidents/month across 500 stores, avg 2 hours per incident",
        existing_monitoring_tools: "Datadog, Splunk, store monitoring dashboard",
        current_it_spend: "$88M OPEX, $15M CAPEX annually",
        current_msp_contract_value: "$35M/year with Wipro",
        pricing_preferences: "Per-store pricing, SLA-based with uptime guarantees",
        renewal_contract_timeline: "Contract renewal in Q2 2026",
        budget_available_for_outsourcing: "$42M for comprehensive retail IT managed services",
        customer_benchmarking_summary: "High complexity with distributed store operations. Opportunity for unified omnichannel IT platform and AI-driven inventory management.",
        additional_commercial_notes: "Strategic focus on digital transformation and omnichannel experience. Requires MSP with retail expertise and POS system management.",
    },
    PremiumRecord {
        customer_name: "David Wilson",
        company_name: "InfoTech Solutions",
        company_size: "Large Enterprise",
        industry_area: "IT/ITES & BPO",
        annual_revenue: "$800M",
        geographics_footprint: "India, USA, UK",
        key_contact: "Rajesh Kumar",
        designation: "Head of Infrastructure",
        email_address: "rajesh.kumar@infotech.com",
        phone_whatsapp: "+1-555-0106",
        linkedin_profile: "linkedin.com/in/rajeshkumar",
        website_url: "www.infotech.com",
        number_of_endpoints: "10000",
        number_of_servers: "400 (200 physical, 200 virtual)",
        cloud_footprint: "Azure - 600 VMs, AWS - 400 instances",
        data_center_details: "5 global data centers + multi-cloud",
        network_size: "150 routers, 500 switches, 100 firewalls, global MPLS",
        existing_security_stack: "Symantec EDR, Checkpoint Firewalls, LogRhythm SIEM",
        it_budget_approx: "$120M annually",
        existing_msp_vendor: "Self-managed with selective vendor partnerships",
        current_slas_and_support_hours: "24x7 follow-the-sun support, 10-min response",
        pain_points_with_existing_it: "Multi-site coordination, talent retention, client SLA pressure",
        average_downtime_incidents: "15 incidents/month, avg 1 hour downtime",
        existing_monitoring_tools: "Nagios, LogRhythm, custom monitoring",
        current_it_spend: "$110M OPEX, $25M CAPEX annually",
        current_msp_contract_value: "$8M/year for selective services",
        pricing_preferences: "Flexible pricing, volume-based discounts",
        renewal_contract_timeline: "Rolling contracts with quarterly reviews",
        budget_available_for_outsourcing: "$15M for infrastructure optimization",
        customer_benchmarking_summary: "Self-managed model works but scaling challenges exist. Opportunity for infrastructure modernization and automation.",
        additional_commercial_notes: "Open to hybrid managed services. Focus on DevOps, automation, and global delivery capabilities.",
    },
    PremiumRecord {
        customer_name: "Dr. Patricia Brown",
        company_name: "State University",
        company_size: "Large Enterprise",
        industry_area: "Education (Schools, Colleges, Universities)",
        annual_revenue: "$500M",
        geographics_footprint: "Multiple campuses - USA",
        key_contact: "Dr. Steven Walsh",
        designation: "CIO",
        email_address: "steven.walsh@stateuniversity.edu",
        phone_whatsapp: "+1-555-0107",
        linkedin_profile: "linkedin.com/in/stevenwalsh",
        website_url: "www.stateuniversity.edu",
        number_of_endpoints: "15000",
        number_of_servers: "180 (90 physical, 90 virtual)",
        cloud_footprint: "Microsoft 365 + Azure - 300 VMs",
        data_center_details: "2 on-prem data centers + Azure",
        network_size: "100 routers, 400 switches (campus-wide), 30 firewalls",
        existing_security_stack: "Microsoft Defender, Palo Alto, Azure Sentinel",
        it_budget_approx: "$38M annually",
        existing_msp_vendor: "Unisys for data center operations",
        current_slas_and_support_hours: "16x5 support (extended during exams)",
        pain_points_with_existing_it: "Budget constraints, legacy systems, student/faculty support demands",
        average_downtime_incidents: "20 incidents/month, avg 30 min downtime",
        existing_monitoring_tools: "SCCM, Azure Monitor, SolarWinds",
        current_it_spend: "$35M OPEX, $8M CAPEX annually",
        current_msp_contract_value: "$12M/year with Unisys",
        pricing_preferences: "Education pricing, predictable annual budgets",
        renewal_contract_timeline: "Contract renewal in Q3 2025",
        budget_available_for_outsourcing: "$15M for modernized IT services",
        customer_benchmarking_summary: "Typical education budget constraints. Opportunity for cloud migration and student experience improvement.",
        additional_commercial_notes: "Priority on learning management systems, research computing, and cybersecurity. Education sector experience required.",
    },
    PremiumRecord {
        customer_name: "James Martinez",
        company_name: "City Government",
        company_size: "Large Enterprise",
        industry_area: "Government & Public Sector",
        annual_revenue: "$1.2B (Budget)",
        geographics_footprint: "Metropolitan area",
        key_contact: "Angela Barnes",
        designation: "Chief Information Security Officer",
        email_address: "angela.barnes@citygovernment.gov",
        phone_whatsapp: "+1-555-0108",
        linkedin_profile: "linkedin.com/in/angelabarnes",
        website_url: "www.citygovernment.gov",
        number_of_endpoints: "5000",
        number_of_servers: "250 (180 physical, 70 virtual)",
        cloud_footprint: "Government Cloud - Azure Gov - 150 VMs",
        data_center_details: "1 government data center + Azure Gov cloud",
        network_size: "80 routers, 300 switches, 40 firewalls, city-wide fiber",
        existing_security_stack: "Tanium, Fortinet Gov Edition, Splunk Gov Cloud",
        it_budget_approx: "$65M annually",
        existing_msp_vendor: "Deloitte for security services",
        current_slas_and_support_hours: "24x7 for critical services, 12x5 for general IT",
        pain_points_with_existing_it: "Compliance burden, aging infrastructure, citizen service expectations",
        average_downtime_incidents: "10 incidents/month, avg 45 min (public service impact)",
        existing_monitoring_tools: "Splunk Gov, Tanium, government SIEM",
        current_it_spend: "$58M OPEX, $15M CAPEX annually",
        current_msp_contract_value: "$18M/year with Deloitte",
        pricing_preferences: "Government procurement compliant, multi-year contracts",
        renewal_contract_timeline: "RFP process begins Q1 2026",
        budget_available_for_outsourcing: "$22M for comprehensive IT modernization",
        customer_benchmarking_summary: "Security-focused with compliance requirements. Opportunity for smart city initiatives and citizen digital services.",
        additional_commercial_notes: "Requires government clearances and compliance certifications. Priority on cybersecurity and public service continuity.",
    },
    PremiumRecord {
        customer_name: "Lisa Thompson",
        company_name: "PowerGrid Energy",
        company_size: "Large Enterprise",
        industry_area: "Energy & Utilities",
        annual_revenue: "$3.8B",
        geographics_footprint: "Regional - 5 states",
        key_contact: "Gregory Howard",
        designation: "Director IT Infrastructure",
        email_address: "gregory.howard@powergrid.com",
        phone_whatsapp: "+1-555-0109",
        linkedin_profile: "linkedin.com/in/gregoryhoward",
        website_url: "www.powergrid.com",
        number_of_endpoints: "3000",
        number_of_servers: "200 (140 physical, 60 virtual)",
        cloud_footprint: "Hybrid - Azure - 100 VMs",
        data_center_details: "3 hardened data centers + limited cloud",
        network_size: "60 routers, 250 switches, 35 firewalls, SCADA network",
        existing_security_stack: "Dragos OT Security, Cisco ISE, Nozomi Networks",
        it_budget_approx: "$72M annually",
        existing_msp_vendor: "Schneider Electric for SCADA, IBM for IT",
        current_slas_and_support_hours: "24x7 support, 5-min response for grid operations",
        pain_points_with_existing_it: "NERC CIP compliance, OT/IT segmentation, critical infrastructure protection",
        average_downtime_incidents: "4 incidents/month, avg 30 min (zero tolerance for grid ops)",
        existing_monitoring_tools: "Nozomi, Dragos, SCADA monitoring systems",
        current_it_spend: "$65M OPEX, $18M CAPEX annually",
        current_msp_contract_value: "$28M/year (split between Schneider and IBM)",
        pricing_preferences: "Uptime guarantees, regulatory compliance pricing",
        renewal_contract_timeline: "Schneider in Q4 2025, IBM in Q2 2026",
        budget_available_for_outsourcing: "$35M for unified OT/IT security platform",
        customer_benchmarking_summary: "Critical infrastructure with zero-downtime requirement. Opportunity for OT security and smart grid technology.",
        additional_commercial_notes: "Requires NERC CIP expertise and critical infrastructure experience. Priority on grid resilience and cybersecurity.",
    },
    PremiumRecord {
        customer_name: "Mark Garcia",
        company_name: "PetroTech Corp",
        company_size: "Large Enterprise",
        industry_area: "Oil & Gas",
        annual_revenue: "$5.5B",
        geographics_footprint: "Global operations",
        key_contact: "Patricia Henderson",
        designation: "VP IT Services",
        email_address: "patricia.henderson@petrotech.com",
        phone_whatsapp: "+1-555-0110",
        linkedin_profile: "linkedin.com/in/patriciahenderson",
        website_url: "www.petrotech.com",
        number_of_endpoints: "4000",
        number_of_servers: "350 (250 physical, 100 virtual)",
        cloud_footprint: "AWS - 200 instances, Private cloud",
        data_center_details: "4 global data centers + private cloud",
        network_size: "100 routers, 350 switches, 50 firewalls, satellite links",
        existing_security_stack: "Claroty, Honeywell OT Security, Palo Alto Networks",
        it_budget_approx: "$150M annually",
        existing_msp_vendor: "Halliburton for field IT, Cognizant for enterprise IT",
        current_slas_and_support_hours: "24x7 global support, 10-min response",
        pain_points_with_existing_it: "Remote operations, OT security, exploration data management",
        average_downtime_incidents: "8 incidents/month, avg 2 hours (production impact)",
        existing_monitoring_tools: "Claroty, custom SCADA monitoring, AWS CloudWatch",
        current_it_spend: "$135M OPEX, $35M CAPEX annually",
        current_msp_contract_value: "$45M/year (split across vendors)",
        pricing_preferences: "Production uptime SLAs, global coverage pricing",
        renewal_contract_timeline: "Cognizant Q1 2026, Halliburton Q3 2025",
        budget_available_for_outsourcing: "$55M for integrated OT/IT platform",
        customer_benchmarking_summary: "Complex global operations with OT/IT convergence needs. Opportunity for unified platform and predictive maintenance.",
        additional_commercial_notes: "Requires oil & gas industry expertise and global delivery. Priority on field operations support and exploration IT.",
    },
    PremiumRecord {
        customer_name: "Jennifer Lee",
        company_name: "LogiChain Solutions",
        company_size: "SME",
        industry_area: "Logistics & Supply Chain",
        annual_revenue: "$250M",
        geographics_footprint: "North America",
        key_contact: "Marcus Reynolds",
        designation: "IT Manager",
        email_address: "marcus.reynolds@logichain.com",
        phone_whatsapp: "+1-555-0111",
        linkedin_profile: "linkedin.com/in/marcusreynolds",
        website_url: "www.logichain.com",
        number_of_endpoints: "800",
        number_of_servers: "40 (20 physical, 20 virtual)",
        cloud_footprint: "AWS - 60 instances",
        data_center_details: "1 data center + AWS cloud",
        network_size: "15 routers, 50 switches, 8 firewalls, VPN",
        existing_security_stack: "Sophos EDR, Fortinet, AWS GuardDuty",
        it_budget_approx: "$12M annually",
        existing_msp_vendor: "Local MSP for basic support",
        current_slas_and_support_hours: "12x5 support, 1-hour response time",
        pain_points_with_existing_it: "Limited IT staff, growth challenges, integration with customer systems",
        average_downtime_incidents: "18 incidents/month, avg 3 hours",
        existing_monitoring_tools: "Basic monitoring, AWS CloudWatch",
        current_it_spend: "$10M OPEX, $3M CAPEX annually",
        current_msp_contract_value: "$2M/year with local MSP",
        pricing_preferences: "Cost-effective, scalable pricing",
        renewal_contract_timeline: "Annual contract, renews Q4 2025",
        budget_available_for_outsourcing: "$4M for comprehensive managed services",
        customer_benchmarking_summary: "Growing SME with limited IT resources. Opportunity for full managed services and business growth enablement.",
        additional_commercial_notes: "Needs scalable IT to support business growth. Priority on logistics systems integration and 24x7 operations support.",
    },
    PremiumRecord {
        customer_name: "Thomas White",
        company_name: "TransportCo",
        company_size: "Large Enterprise",
        industry_area: "Transportation & Aviation",
        annual_revenue: "$1.1B",
        geographics_footprint: "USA, Canada, Mexico",
        key_contact: "Linda Coleman",
        designation: "CTO",
        email_address: "linda.coleman@transportco.com",
        phone_whatsapp: "+1-555-0112",
        linkedin_profile: "linkedin.com/in/lindacoleman",
        website_url: "www.transportco.com",
        number_of_endpoints: "2200",
        number_of_servers: "120 (60 physical, 60 virtual)",
        cloud_footprint: "Azure - 150 VMs",
        data_center_details: "2 regional data centers + Azure",
        network_size: "50 routers, 180 switches, 25 firewalls, SD-WAN",
        existing_security_stack: "Carbon Black, Cisco Firepower, Splunk",
        it_budget_approx: "$48M annually",
        existing_msp_vendor: "CGI for IT operations",
        current_slas_and_support_hours: "24x7 support, 20-min response",
        pain_points_with_existing_it: "Fleet management integration, driver systems, real-time tracking challenges",
        average_downtime_incidents: "14 incidents/month, avg 90 min",
        existing_monitoring_tools: "Splunk, Azure Monitor, fleet tracking systems",
        current_it_spend: "$42M OPEX, $10M CAPEX annually",
        current_msp_contract_value: "$18M/year with CGI",
        pricing_preferences: "Performance-based, fleet operations SLAs",
        renewal_contract_timeline: "Contract renewal in Q1 2026",
        budget_available_for_outsourcing: "$22M for modern transportation IT platform",
        customer_benchmarking_summary: "Transportation challenges with IoT and real-time systems. Opportunity for fleet optimization and driver experience improvement.",
        additional_commercial_notes: "Requires transportation industry expertise. Priority on fleet management, driver safety systems, and logistics optimization.",
    },
    PremiumRecord {
        customer_name: "Amanda Clark",
        company_name: "Luxury Hotels International",
        company_size: "Large Enterprise",
        industry_area: "Hospitality & Travel",
        annual_revenue: "$900M",
        geographics_footprint: "Global - 100+ properties",
        key_contact: "Christopher Evans",
        designation: "VP IT Operations",
        email_address: "christopher.evans@luxuryhotels.com",
        phone_whatsapp: "+1-555-0113",
        linkedin_profile: "linkedin.com/in/christopherevans",
        website_url: "www.luxuryhotels.com",
        number_of_endpoints: "6000",
        number_of_servers: "180 (80 physical, 100 virtual)",
        cloud_footprint: "AWS - 250 instances, Azure - 100 VMs",
        data_center_details: "3 regional data centers + multi-cloud",
        network_size: "120 routers, 350 switches, 45 firewalls, global MPLS",
        existing_security_stack: "Trend Micro, Palo Alto, Splunk",
        it_budget_approx: "$52M annually",
        existing_msp_vendor: "Amadeus for hospitality IT, Infosys for infrastructure",
        current_slas_and_support_hours: "24x7 support, 15-min response",
        pain_points_with_existing_it: "Property systems integration, guest experience tech, PCI compliance",
        average_downtime_incidents: "22 incidents/month across properties, avg 1 hour",
        existing_monitoring_tools: "Property management system monitoring, Splunk, Datadog",
        current_it_spend: "$48M OPEX, $12M CAPEX annually",
        current_msp_contract_value: "$28M/year (split between Amadeus and Infosys)",
        pricing_preferences: "Per-property pricing, guest experience SLAs",
        renewal_contract_timeline: "Amadeus Q2 2026, Infosys Q4 2025",
        budget_available_for_outsourcing: "$32M for unified hospitality platform",
        customer_benchmarking_summary: "Luxury hospitality with high guest expectations. Opportunity for digital guest experience and property tech consolidation.",
        additional_commercial_notes: "Requires hospitality industry expertise. Priority on guest experience, property management systems, and revenue optimization.",
    },
    PremiumRecord {
        customer_name: "Richard Harris",
        company_name: "PropertyDev Group",
        company_size: "Large Enterprise",
        industry_area: "Real Estate & Facilities Management",
        annual_revenue: "$2.2B",
        geographics_footprint: "Major US cities",
        key_contact: "Victoria Bennett",
        designation: "Chief Digital Officer",
        email_address: "victoria.bennett@propertydev.com",
        phone_whatsapp: "+1-555-0114",
        linkedin_profile: "linkedin.com/in/victoriabennett",
        website_url: "www.propertydev.com",
        number_of_endpoints: "1500",
        number_of_servers: "80 (40 physical, 40 virtual)",
        cloud_footprint: "Azure - 120 VMs",
        data_center_details: "2 data centers + Azure",
        network_size: "35 routers, 120 switches, 18 firewalls",
        existing_security_stack: "Microsoft Defender, Fortinet, Azure Sentinel",
        it_budget_approx: "$38M annually",
        existing_msp_vendor: "JLL for facility tech, Atos for IT",
        current_slas_and_support_hours: "16x5 support, 30-min response",
        pain_points_with_existing_it: "Building IoT integration, smart building tech, tenant services",
        average_downtime_incidents: "12 incidents/month, avg 2 hours",
        existing_monitoring_tools: "Building management systems, Azure Monitor",
        current_it_spend: "$34M OPEX, $8M CAPEX annually",
        current_msp_contract_value: "$16M/year (split between JLL and Atos)",
        pricing_preferences: "Smart building ROI-based pricing",
        renewal_contract_timeline: "Both contracts Q3 2025",
        budget_available_for_outsourcing: "$20M for smart building platform",
        customer_benchmarking_summary: "Real estate tech transformation opportunity. Focus on IoT, smart buildings, and tenant experience.",
        additional_commercial_notes: "Requires proptech and IoT expertise. Priority on building automation, energy management, and tenant digital services.",
    },
    PremiumRecord {
        customer_name: "Maria Rodriguez",
        company_name: "StreamMedia Networks",
        company_size: "Large Enterprise",
        industry_area: "Media & Entertainment",
        annual_revenue: "$1.4B",
        geographics_footprint: "North America",
        key_contact: "Andrew Sullivan",
        designation: "CTO",
        email_address: "andrew.sullivan@streammedia.com",
        phone_whatsapp: "+1-555-0115",
        linkedin_profile: "linkedin.com/in/andrewsullivan",
        website_url: "www.streammedia.com",
        number_of_endpoints: "2500",
        number_of_servers: "300 (100 physical, 200 virtual)",
        cloud_footprint: "AWS - 500 instances, CDN infrastructure",
        data_center_details: "3 media data centers + AWS + CDN",
        network_size: "70 routers, 250 switches, 35 firewalls, high-bandwidth network",
        existing_security_stack: "CrowdStrike, Akamai Security, Datadog",
        it_budget_approx: "$68M annually",
        existing_msp_vendor: "Akamai for CDN, Rackspace for cloud",
        current_slas_and_support_hours: "24x7 support, 10-min response for streaming services",
        pain_points_with_existing_it: "Content delivery optimization, DDoS protection, streaming quality",
        average_downtime_incidents: "10 incidents/month, avg 30 min (subscriber impact)",
        existing_monitoring_tools: "Datadog, Akamai monitoring, custom streaming analytics",
        current_it_spend: "$62M OPEX, $15M CAPEX annually",
        current_msp_contract_value: "$35M/year (Akamai $25M, Rackspace $10M)",
        pricing_preferences: "Performance-based, streaming quality SLAs",
        renewal_contract_timeline: "Akamai Q4 2025, Rackspace Q1 2026",
        budget_available_for_outsourcing: "$40M for next-gen streaming platform",
        customer_benchmarking_summary: "Streaming media with high availability needs. Opportunity for AI-driven content delivery and viewer experience optimization.",
        additional_commercial_notes: "Requires media streaming expertise. Priority on content delivery, DDoS protection, and global streaming performance.",
    },
    PremiumRecord {
        customer_name: "Kevin Taylor",
        company_name: "AutoTech Manufacturing",
        company_size: "Large Enterprise",
        industry_area: "Automotive",
        annual_revenue: "$3.5B",
        geographics_footprint: "Global - 15 plants",
        key_contact: "Michelle Wright",
        designation: "Director IT",
        email_address: "michelle.wright@autotech.com",
        phone_whatsapp: "+1-555-0116",
        linkedin_profile: "linkedin.com/in/michellewright",
        website_url: "www.autotech.com",
        number_of_endpoints: "5000",
        number_of_servers: "250 (150 physical, 100 virtual)",
        cloud_footprint: "Azure - 200 VMs, Private cloud",
        data_center_details: "4 manufacturing data centers + Azure",
        network_size: "90 routers, 400 switches, 40 firewalls, OT/IT network",
        existing_security_stack: "Symantec, Fortinet, manufacturing OT security",
        it_budget_approx: "$95M annually",
        existing_msp_vendor: "Rockwell for OT, Capgemini for IT",
        current_slas_and_support_hours: "24x7 support, 15-min response for production systems",
        pain_points_with_existing_it: "Production line automation, quality systems, supply chain integration",
        average_downtime_incidents: "9 incidents/month, avg 2.5 hours (production loss)",
        existing_monitoring_tools: "Rockwell monitoring, Azure Monitor, MES systems",
        current_it_spend: "$85M OPEX, $22M CAPEX annually",
        current_msp_contract_value: "$38M/year (Rockwell $22M, Capgemini $16M)",
        pricing_preferences: "Production uptime guarantees, zero-defect IT",
        renewal_contract_timeline: "Both Q2 2026",
        budget_available_for_outsourcing: "$45M for Industry 4.0 platform",
        customer_benchmarking_summary: "Automotive manufacturing with Industry 4.0 ambitions. Opportunity for smart factory and predictive maintenance.",
        additional_commercial_notes: "Requires automotive and OT expertise. Priority on production systems, quality control, and smart manufacturing.",
    },
    PremiumRecord {
        customer_name: "Susan Moore",
        company_name: "LegalPro Services",
        company_size: "SME",
        industry_area: "Professional Services (Legal, Accounting, Consulting)",
        annual_revenue: "$180M",
        geographics_footprint: "USA - 25 offices",
        key_contact: "Timothy Brooks",
        designation: "IT Director",
        email_address: "timothy.brooks@legalpro.com",
        phone_whatsapp: "+1-555-0117",
        linkedin_profile: "linkedin.com/in/timothybrooks",
        website_url: "www.legalpro.com",
        number_of_endpoints: "1200",
        number_of_servers: "50 (25 physical, 25 virtual)",
        cloud_footprint: "Microsoft 365 + Azure - 80 VMs",
        data_center_details: "1 data center + Microsoft 365",
        network_size: "25 routers, 80 switches, 12 firewalls, MPLS",
        existing_security_stack: "Microsoft Defender, Cisco Umbrella, Azure Sentinel",
        it_budget_approx: "$16M annually",
        existing_msp_vendor: "CompuCom for managed services",
        current_slas_and_support_hours: "12x5 support, 2-hour response time",
        pain_points_with_existing_it: "Data security, client confidentiality, compliance requirements",
        average_downtime_incidents: "15 incidents/month, avg 90 min",
        existing_monitoring_tools: "Microsoft 365 admin, Azure Monitor",
        current_it_spend: "$14M OPEX, $4M CAPEX annually",
        current_msp_contract_value: "$6M/year with CompuCom",
        pricing_preferences: "Predictable pricing, compliance-inclusive",
        renewal_contract_timeline: "Contract renewal Q4 2025",
        budget_available_for_outsourcing: "$8M for comprehensive legal tech platform",
        customer_benchmarking_summary: "Legal services with high security needs. Opportunity for practice management and client collaboration platforms.",
        additional_commercial_notes: "Requires legal industry expertise and compliance knowledge. Priority on data security, client confidentiality, and matter management.",
    },
    PremiumRecord {
        customer_name: "Daniel Jackson",
        company_name: "BuildTech Construction",
        company_size: "Large Enterprise",
        industry_area: "Construction & Engineering",
        annual_revenue: "$2.8B",
        geographics_footprint: "USA, Canada",
        key_contact: "Sandra Phillips",
        designation: "Head of IT",
        email_address: "sandra.phillips@buildtech.com",
        phone_whatsapp: "+1-555-0118",
        linkedin_profile: "linkedin.com/in/sandraphillips",
        website_url: "www.buildtech.com",
        number_of_endpoints: "3000",
        number_of_servers: "120 (60 physical, 60 virtual)",
        cloud_footprint: "Azure - 150 VMs",
        data_center_details: "2 data centers + Azure",
        network_size: "55 routers, 220 switches, 22 firewalls",
        existing_security_stack: "McAfee, Fortinet, project management security",
        it_budget_approx: "$58M annually",
        existing_msp_vendor: "Procore for construction tech, NTT for IT",
        current_slas_and_support_hours: "16x6 support, 30-min response",
        pain_points_with_existing_it: "Project site connectivity, mobile workforce, BIM data management",
        average_downtime_incidents: "16 incidents/month, avg 2 hours",
        existing_monitoring_tools: "Procore monitoring, Azure Monitor, site connectivity tools",
        current_it_spend: "$52M OPEX, $14M CAPEX annually",
        current_msp_contract_value: "$24M/year (Procore $14M, NTT $10M)",
        pricing_preferences: "Project-based pricing, site deployment flexibility",
        renewal_contract_timeline: "NTT Q1 2026, Procore Q3 2025",
        budget_available_for_outsourcing: "$28M for construction tech platform",
        customer_benchmarking_summary: "Construction with field operations challenges. Opportunity for mobile workforce and BIM collaboration platforms.",
        additional_commercial_notes: "Requires construction industry expertise. Priority on project site connectivity, BIM systems, and mobile workforce support.",
    },
    PremiumRecord {
        customer_name: "Nancy Williams",
        company_name: "AgriTech Solutions",
        company_size: "SME",
        industry_area: "Agriculture & Agri-tech",
        annual_revenue: "$150M",
        geographics_footprint: "USA - Midwest region",
        key_contact: "Donald Turner",
        designation: "CIO",
        email_address: "donald.turner@agritech.com",
        phone_whatsapp: "+1-555-0119",
        linkedin_profile: "linkedin.com/in/donaldturner",
        website_url: "www.agritech.com",
        number_of_endpoints: "500",
        number_of_servers: "30 (15 physical, 15 virtual)",
        cloud_footprint: "AWS - 50 instances",
        data_center_details: "1 on-prem + AWS",
        network_size: "12 routers, 40 switches, 6 firewalls",
        existing_security_stack: "Trend Micro, AWS Security Hub",
        it_budget_approx: "$9M annually",
        existing_msp_vendor: "Regional MSP for support",
        current_slas_and_support_hours: "12x5 support, 4-hour response",
        pain_points_with_existing_it: "Farm IoT integration, weather data, precision agriculture tech",
        average_downtime_incidents: "20 incidents/month, avg 4 hours",
        existing_monitoring_tools: "Basic monitoring, AWS CloudWatch",
        current_it_spend: "$8M OPEX, $2M CAPEX annually",
        current_msp_contract_value: "$1.5M/year with regional MSP",
        pricing_preferences: "Cost-effective, seasonal flexibility",
        renewal_contract_timeline: "Annual renewal Q1 2026",
        budget_available_for_outsourcing: "$3M for agritech platform",
        customer_benchmarking_summary: "Growing agritech SME. Opportunity for IoT, precision agriculture, and data analytics platforms.",
        additional_commercial_notes: "Needs agriculture industry knowledge. Priority on farm IoT, weather integration, and precision farming technology.",
    },
    PremiumRecord {
        customer_name: "Christopher Miller",
        company_name: "Global Aid Foundation",
        company_size: "SME",
        industry_area: "Non-profits / NGOs",
        annual_revenue: "$80M (Donations)",
        geographics_footprint: "Global - 40+ countries",
        key_contact: "Rebecca Morgan",
        designation: "IT Manager",
        email_address: "rebecca.morgan@globalaid.org",
        phone_whatsapp: "+1-555-0120",
        linkedin_profile: "linkedin.com/in/rebeccamorgan",
        website_url: "www.globalaid.org",
        number_of_endpoints: "800",
        number_of_servers: "40 (20 physical, 20 virtual)",
        cloud_footprint: "Microsoft 365 + Azure Non-profit - 60 VMs",
        data_center_details: "1 data center + Microsoft nonprofit cloud",
        network_size: "18 routers, 60 switches, 10 firewalls, satellite connectivity",
        existing_security_stack: "Microsoft Defender, Cloudflare, Azure Sentinel",
        it_budget_approx: "$6M annually",
        existing_msp_vendor: "TechSoup for nonprofit IT support",
        current_slas_and_support_hours: "24x7 support (remote locations), 2-hour response",
        pain_points_with_existing_it: "Remote field operations, bandwidth constraints, donor data security",
        average_downtime_incidents: "25 incidents/month, avg 3 hours (remote locations)",
        existing_monitoring_tools: "Microsoft 365 admin, basic monitoring",
        current_it_spend: "$5M OPEX, $1.5M CAPEX annually",
        current_msp_contract_value: "$800K/year with TechSoup",
        pricing_preferences: "Nonprofit pricing, mission-aligned",
        renewal_contract_timeline: "Annual renewal Q2 2026",
        budget_available_for_outsourcing: "$2M for global operations platform",
        customer_benchmarking_summary: "Global nonprofit with remote operations challenges. Opportunity for field operations tech and donor management systems.",
        additional_commercial_notes: "Requires nonprofit experience and mission alignment. Priority on field operations, satellite connectivity, and donor management.",
    },
];
