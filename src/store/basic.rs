use crate::record::BasicRecord;

/// Proposition 1 - Basic IT Infrastructure, all sectors.
pub(crate) static RECORDS: [BasicRecord; 20] = [
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
    BasicRecord {
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
    },
];
