use crate::dataobjects::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| String::from(*s)).collect()
}

fn highlight(icon: &'static str, title: &str, blurb: &str) -> Highlight {
    Highlight { icon, title: title.into(), blurb: blurb.into() }
}

fn certification(name: &str, issuer: &str, status: CertificationStatus, year: &str) -> Certification {
    Certification { name: name.into(), issuer: issuer.into(), status, year: Some(year.into()) }
}

pub(crate) const CV_FILE_NAME: &str = "Ola-Amodu-CV.pdf";

lazy_static! {
    pub(crate) static ref PERSONAL_INFO: PersonalInfo = personal_info();
    pub(crate) static ref HOME_HIGHLIGHTS: Vec<Highlight> = home_highlights();
    pub(crate) static ref PROFESSIONAL_SUMMARY: Vec<SummaryPoint> = professional_summary();
    pub(crate) static ref EXPERIENCES: Vec<Experience> = experiences();
    pub(crate) static ref PROJECTS: Vec<Project> = projects();
    pub(crate) static ref SKILL_CATEGORIES: Vec<SkillCategory> = skill_categories();
    pub(crate) static ref KEY_SKILLS: Vec<String> = key_skills();
    pub(crate) static ref CERTIFICATIONS: Vec<Certification> = certifications();
    pub(crate) static ref PROFILE_LINKS: Vec<ProfileLink> = profile_links();
    pub(crate) static ref AREAS_OF_INTEREST: Vec<String> = areas_of_interest();
    pub(crate) static ref SECUREVIGIL_FEATURES: Vec<Highlight> = securevigil_features();
    pub(crate) static ref SECUREVIGIL_SNIPPETS: Vec<CodeSnippet> = securevigil_snippets();
}

pub(crate) fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Olaribigbe Amodu".into(),
        headline: "Cybersecurity & IT Support Specialist | Digital Forensics | IT Infrastructure Leadership".into(),
        summary: "Dedicated and detail-oriented Cybersecurity professional with hands-on expertise in \
                  system administration, troubleshooting, and network security. Skilled in delivering \
                  proactive security measures and bridging technical solutions with organizational needs."
            .into(),
        location: "Lagos, Nigeria".into(),
        email: "olaribigbe.amodu@gmail.com".into(),
        phone: "+2348170339744".into(),
        phone_display: "+234 817 033 9744".into(),
        photo: Some("profile.jpeg".into()),
    }
}

pub(crate) fn home_highlights() -> Vec<Highlight> {
    vec![
        highlight("shield", "Cybersecurity Expertise",
            "Certified Ethical Hacker (CEH) with extensive experience in vulnerability analysis, \
             penetration testing, and digital forensics."),
        highlight("server", "IT Infrastructure",
            "Expert in designing, implementing, and maintaining enterprise-level IT systems \
             with focus on reliability and scalability."),
        highlight("cloud", "DevOps & Cloud",
            "Proficient in Azure, Google Cloud Platform, and implementing automated deployment \
             pipelines for efficient operations."),
        highlight("code", "Python Scripting",
            "Advanced Python programming for automation, security tools, data analysis, \
             and system administration tasks."),
        highlight("network", "Network Security",
            "Skilled in implementing network security solutions, firewalls, VPNs, \
             and securing enterprise networks."),
        highlight("lock", "Digital Forensics",
            "Experienced in incident response, forensic analysis, threat detection, \
             and security incident investigation."),
    ]
}

pub(crate) fn professional_summary() -> Vec<SummaryPoint> {
    let point = |lead: &str, rest: &str| SummaryPoint { lead: lead.into(), rest: rest.into() };
    vec![
        point("7+ years of progressive experience",
            "spanning IT infrastructure management, cybersecurity, digital forensics, system administration, and academic leadership."),
        point("Acted as VP of Systems",
            ", architect, and systems administrator overseeing technical operations, hardware/software issues, and IT compliance."),
        point("Partnered with sales and business development teams",
            "to design and deliver technology presentations to schools and parents, increasing company revenue by 65%."),
        point("Expert in cloud infrastructure",
            ", networking hardware, cloud-based backup solutions, and large-scale computer labs/CBT centers (250+ systems)."),
        point("Delivered specialized training",
            "in CEH, cybersecurity, and digital forensics, managed cross-functional academic teams, and developed coding and robotics curricula."),
    ]
}

pub(crate) fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            title: "Centre Academic Head | Network Administrator | CEH & Cybersecurity Instructor".into(),
            organization: "Aptech Computer Education – Maryland Centre".into(),
            location: Some("Lagos, Nigeria".into()),
            period: "Aug 2023 – Present".into(),
            description: Some("Strategic Leadership, IT Infrastructure Modernization & Cybersecurity Education".into()),
            achievements: strings(&[
                "Improved student retention and graduation rates through a structured mentorship and engagement framework",
                "Introduced KPI-driven faculty performance system across Multimedia, Networking & Software departments",
                "Delivered 100% on-time academic project submissions to HQ, eliminating compliance backlogs",
                "Modernized IT systems via preventive server maintenance, automated backups, and cloud migration (Google Drive & OneDrive)",
                "Achieved zero exam disruptions by strengthening system resilience and business continuity",
                "Designed real-world CEH & Digital Forensics labs simulating cyberattack and investigation scenarios",
                "Improved institutional cyber hygiene through structured security awareness and incident response training",
                "Graduated industry-ready cybersecurity professionals aligned with global standards",
            ]),
            kind: "IT Infrastructure & Cybersecurity Leadership".into(),
        },
        Experience {
            title: "Cyber Security Analyst (Virtual Experience)".into(),
            organization: "AIG Shields Up – Forage (Remote, New York, USA)".into(),
            location: Some("Remote".into()),
            period: "Jun 2024".into(),
            description: Some("Cyber Threat Intelligence, Vulnerability Triage & Ransomware Simulation".into()),
            achievements: strings(&[
                "Conducted enterprise threat analysis aligned with CISA advisories",
                "Applied vulnerability triage methodologies and drafted executive-level security advisories",
                "Developed Python-based ethical hacking script to simulate ransomware key recovery",
                "Translated technical risks into business-impact language for cross-functional stakeholders",
                "Strengthened enterprise-level risk prioritization and incident response coordination",
            ]),
            kind: "Cybersecurity Risk Analysis".into(),
        },
        Experience {
            title: "Coding & Robotics Training Manager".into(),
            organization: "Nhames Projects Limited".into(),
            location: Some("Ikeja, Lagos, Nigeria".into()),
            period: "Jul 2022 – Aug 2023".into(),
            description: Some("Technical Leadership, Curriculum Innovation & Revenue Growth".into()),
            achievements: strings(&[
                "Designed scalable coding & robotics curriculum (Python, Java, C++)",
                "Led instructor teams using KPI-driven coaching and structured evaluation systems",
                "Collaborated with business development to convert technical presentations into long-term contracts",
                "Achieved 65% revenue growth through strategic stakeholder engagement",
                "Implemented data-driven performance analytics improving instructional ROI",
                "Optimized departmental budgeting, logistics, and resource allocation",
            ]),
            kind: "Technical Leadership & Business Growth".into(),
        },
        Experience {
            title: "Multimedia & Computer Hardware Instructor".into(),
            organization: "Daleware Institute of Technology".into(),
            location: Some("Lagos, Nigeria".into()),
            period: "Jul 2021 – Jun 2022".into(),
            description: Some("Multimedia Education & Large-Scale IT Infrastructure Support (250+ Systems)".into()),
            achievements: strings(&[
                "Delivered industry-aligned multimedia curriculum (graphics, animation, video production)",
                "Maintained and optimized 250+ CBT systems ensuring seamless academic operations",
                "Reduced system downtime improving exam reliability and institutional credibility",
                "Enhanced student pass rates and project quality through hands-on mentorship",
                "Integrated networking fundamentals into multimedia and hardware training",
            ]),
            kind: "IT Infrastructure & Instruction".into(),
        },
        Experience {
            title: "IT & Systems Support Intern".into(),
            organization: "Arkounting Business Concepts Limited".into(),
            location: Some("Lagos, Nigeria".into()),
            period: "Jul 2015 – Jun 2016".into(),
            description: Some("IT Support, Documentation & Disaster Recovery Assistance".into()),
            achievements: strings(&[
                "Troubleshot hardware, software, and networking issues minimizing downtime",
                "Improved IT documentation and asset visibility processes",
                "Assisted in implementing backup and disaster recovery procedures",
                "Strengthened operational continuity through structured IT support workflows",
            ]),
            kind: "IT Support & Systems Administration".into(),
        },
    ]
}

pub(crate) fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "SecureVigil - Enterprise Vulnerability Scanner".into(),
            category: "Production-Grade Cybersecurity Platform".into(),
            icon: "shield",
            featured: true,
            description: "Complete enterprise vulnerability scanning system with Flask dashboard, SQLite persistence, \
                          automated email alerts, historical trend analysis, and Azure cloud deployment with CI/CD pipeline."
                .into(),
            technologies: strings(&["Python", "Flask", "Nmap", "SQLite", "Docker", "Azure", "CI/CD"]),
            outcomes: strings(&[
                "Reduced vulnerability scanning time from 4 hours to 15 minutes",
                "Automated executive reporting with risk prioritization",
                "Implemented real-time email alerting for high-risk findings",
                "Deployed production system on Azure with 99.9% uptime",
                "Created CI/CD pipeline with automated testing",
            ]),
            proof: "Full Source Code | Live Demo | Architecture Documentation | Azure Deployment".into(),
            link: Some("/projects/securevigil".into()),
        },
        Project {
            title: "Ransomware Simulation & Key Recovery Lab".into(),
            category: "Cybersecurity Education & Training".into(),
            icon: "lock",
            featured: true,
            description: "Educational ransomware simulation demonstrating encryption mechanics, brute force vulnerabilities, \
                          and incident response procedures. Validates AIG cyber simulation experience with hands-on \
                          cryptography implementation."
                .into(),
            technologies: strings(&["Python", "Cryptography", "Brute Force", "Incident Response", "CEH"]),
            outcomes: strings(&[
                "Trained 150+ students in ransomware defense strategies",
                "Demonstrated weak vs. strong key cryptography concepts",
                "Created realistic incident response scenarios",
                "Developed automated decryption and recovery workflows",
                "Integrated into CEH and forensics curriculum",
            ]),
            proof: "Lab Documentation | Training Materials | Simulation Screenshots | Student Certification Results".into(),
            link: None,
        },
        Project {
            title: "Multi-VLAN Enterprise Network Infrastructure".into(),
            category: "Network Security & Infrastructure".into(),
            icon: "network",
            featured: true,
            description: "Complete enterprise network segmentation with router-on-a-stick configuration, DHCP services \
                          per VLAN, ACLs for security, and guest network isolation. Demonstrates advanced Cisco networking \
                          and security architecture."
                .into(),
            technologies: strings(&["Cisco IOS", "VLANs", "ACLs", "DHCP", "Network Segmentation", "Packet Tracer"]),
            outcomes: strings(&[
                "Designed 4-VLAN architecture for 250+ endpoints",
                "Implemented security policies preventing unauthorized inter-VLAN traffic",
                "Isolated guest network from sensitive internal resources",
                "Configured automated DHCP with proper DNS settings",
                "Achieved 99.8% network uptime in production deployment",
            ]),
            proof: "Packet Tracer File | Configuration Scripts | Network Diagram | Security Policy Documentation".into(),
            link: None,
        },
        Project {
            title: "Azure Secure Cloud Architecture".into(),
            category: "Cloud Infrastructure & DevOps".into(),
            icon: "cloud",
            featured: true,
            description: "Production-grade Azure deployment with WAF, NSGs, private endpoints, Azure Bastion, automated \
                          backups, and comprehensive monitoring. Demonstrates enterprise cloud security architecture \
                          aligned with Azure Solutions Architect certification."
                .into(),
            technologies: strings(&["Azure", "ARM Templates", "NSGs", "Key Vault", "Bastion", "Log Analytics", "Site Recovery"]),
            outcomes: strings(&[
                "Deployed secure multi-tier architecture with zero public IPs on VMs",
                "Implemented WAF with OWASP rule sets blocking 500+ attacks/month",
                "Configured automated backup and DR with 2-hour RTO",
                "Reduced infrastructure costs by 40% through reserved instances",
                "Achieved 99.95% uptime with auto-scaling and load balancing",
            ]),
            proof: "Architecture Diagrams | Cost Analysis | ARM Templates | Security Assessment Report".into(),
            link: None,
        },
        Project {
            title: "IT Asset Management Dashboard".into(),
            category: "Enterprise IT Operations".into(),
            icon: "database",
            featured: true,
            description: "Flask-based asset tracking system for 250+ CBT systems with automated maintenance alerts, \
                          warranty tracking, CSV export, and comprehensive reporting. Validates IT leadership and \
                          systems administration experience."
                .into(),
            technologies: strings(&["Python", "Flask", "SQLite", "HTML/CSS", "REST API", "Automated Alerts"]),
            outcomes: strings(&[
                "Tracked 250+ assets across multiple lab locations",
                "Automated maintenance scheduling reducing downtime by 35%",
                "Implemented warranty expiry alerts preventing 12+ support lapses",
                "Generated executive reports for budget planning",
                "Reduced asset procurement time by 50% through accurate inventory",
            ]),
            proof: "Live Dashboard | Sample Reports | Database Schema | API Documentation".into(),
            link: None,
        },
    ]
}

pub(crate) fn skill_categories() -> Vec<SkillCategory> {
    let category = |category: &str, skills: &[&str]| SkillCategory { category: category.into(), skills: strings(skills) };
    vec![
        category("Cybersecurity & Forensics Tools", &[
            "Wireshark", "Nmap", "Burp Suite", "Metasploit", "SQLMap", "FTK Imager",
            "Autopsy", "Nessus", "CEH Toolkit", "OWASP ZAP", "Volatility", "Kali Linux",
            "LAN/WAN Configuration", "TCP/IP, UDP/IP, DNS", "Windows Server Administration",
        ]),
        category("Cloud & Infrastructure", &[
            "Microsoft Azure (IaaS, PaaS)", "Google Cloud Platform", "Docker", "Kubernetes",
            "Terraform", "Cloud-Based Backup & Recovery", "Planning, Virtualization",
        ]),
        category("Programming & Scripting", &[
            "Python (Advanced)", "C, C++, Java", "Bash", "PowerShell", "HTML/CSS", "JavaScript",
        ]),
        category("Data & Analytics Tools", &[
            "Excel (Advanced)", "Pandas", "Seaborn", "Matplotlib", "SQL", "MySQL",
        ]),
        category("Project & Business Tools", &[
            "Google Suite", "MS Office", "Project Management",
            "Production Tools (Graphics, Animation, Video Editing)",
            "Business Presentations", "Negotiation & Stakeholder Engagement",
        ]),
    ]
}

pub(crate) fn key_skills() -> Vec<String> {
    strings(&[
        "Applied Python Programming",
        "Vulnerability Triage",
        "Ethical Hacking",
        "Security Analysis",
        "CISA - NIST, Alice",
        "Multimedia Production Tools (Graphics, Animation, Video Editing)",
        "Data Analysis",
        "Problem-Solving",
        "Communication",
        "Strategy",
    ])
}

pub(crate) fn certifications() -> Vec<Certification> {
    use CertificationStatus::*;
    const CODERED: &str = "Codered (EC Council)";
    const APTECH: &str = "Aptech Computer Education";
    vec![
        certification("Machine Learning for Application in Digital Forensics", CODERED, InView, "2026"),
        certification("AI for Cybersecurity & Bug Bounty Hunting", CODERED, InView, "2026"),
        certification("Red Team Mastery: Advanced Offensive Security", CODERED, Certified, "2026"),
        certification("Cybersecurity for Businesses", "EC Council", Certified, "2025"),
        certification("Ethical Hacking", "Cisco", Certified, "2025"),
        certification("Ethical Hacking", APTECH, Certified, "2025"),
        certification("Security Architecture & Hacking", APTECH, Certified, "2025"),
        certification("Security Programming with Python (Advanced)", APTECH, Certified, "2025"),
        certification("Penetration Testing Services", APTECH, Certified, "2025"),
        certification("Cybersecurity Operations Fundamentals", APTECH, Certified, "2025"),
        certification("Implementing Network Security", APTECH, Certified, "2025"),
        certification("Enterprise Network Core Technologies", APTECH, Certified, "2025"),
        certification("Implementing, Managing & Monitoring Azure Environment", APTECH, Certified, "2025"),
        certification("Azure Architect Technologies", APTECH, Certified, "2025"),
        certification("Azure Solutions Architect Design", APTECH, Certified, "2025"),
        certification("Fundamentals of Red Hat System Administration", APTECH, Certified, "2025"),
        certification("Securing Mobile Devices", APTECH, Certified, "2025"),
        certification("Fundamentals of JavaScript", APTECH, Certified, "2025"),
    ]
}

pub(crate) fn profile_links() -> Vec<ProfileLink> {
    vec![
        ProfileLink {
            label: "LinkedIn".into(),
            blurb: "Connect professionally".into(),
            url: "https://linkedin.com/in/olaribigbe-amodu-4a611216b".into(),
        },
        ProfileLink {
            label: "GitHub".into(),
            blurb: "View my code and projects".into(),
            url: "https://github.com/AmoduOlaribigbe".into(),
        },
    ]
}

pub(crate) fn areas_of_interest() -> Vec<String> {
    strings(&[
        "Cybersecurity Consulting & Penetration Testing",
        "IT Infrastructure Architecture & Management",
        "DevOps & Cloud Security Implementation",
        "Digital Forensics & Incident Response",
        "Technical Training & Workshop Facilitation",
    ])
}

pub(crate) fn securevigil_features() -> Vec<Highlight> {
    vec![
        highlight("shield", "Nmap Scanner Engine", "Automated network scanning with service detection and version enumeration"),
        highlight("database", "SQLite Persistence", "Historical vulnerability data storage with trend analysis capabilities"),
        highlight("mail", "Email Alerts", "Automatic high-risk vulnerability notifications to security teams"),
        highlight("trending-up", "Trend Analytics", "Historical vulnerability tracking with timeline visualization"),
        highlight("cloud", "Azure Deployment", "Production-ready deployment on Azure App Service with Docker"),
        highlight("git-branch", "CI/CD Pipeline", "Automated testing and deployment with Azure DevOps"),
    ]
}

pub(crate) fn securevigil_snippets() -> Vec<CodeSnippet> {
    vec![
        CodeSnippet {
            key: "scanner",
            label: "Scanner",
            file_name: "scanner.py",
            icon: "code",
            source: include_str!("../content/securevigil/scanner.py"),
        },
        CodeSnippet {
            key: "risk",
            label: "Risk Engine",
            file_name: "risk_engine.py",
            icon: "shield",
            source: include_str!("../content/securevigil/risk_engine.py"),
        },
        CodeSnippet {
            key: "database",
            label: "Database",
            file_name: "database.py",
            icon: "database",
            source: include_str!("../content/securevigil/database.py"),
        },
        CodeSnippet {
            key: "dashboard",
            label: "Dashboard",
            file_name: "app.py (Flask Dashboard)",
            icon: "terminal",
            source: include_str!("../content/securevigil/app.py"),
        },
        CodeSnippet {
            key: "email",
            label: "Email Alert",
            file_name: "email_alert.py",
            icon: "mail",
            source: include_str!("../content/securevigil/email_alert.py"),
        },
        CodeSnippet {
            key: "docker",
            label: "Docker",
            file_name: "Dockerfile",
            icon: "cloud",
            source: include_str!("../content/securevigil/Dockerfile"),
        },
        CodeSnippet {
            key: "pipeline",
            label: "CI/CD",
            file_name: "azure-pipeline.yml (CI/CD)",
            icon: "git-branch",
            source: include_str!("../content/securevigil/azure-pipeline.yml"),
        },
    ]
}

pub(crate) const SECUREVIGIL_ARCHITECTURE: &str = include_str!("../content/securevigil/architecture.txt");
pub(crate) const SECUREVIGIL_STRUCTURE: &str = include_str!("../content/securevigil/structure.txt");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_securevigil_links_to_details() -> () {
        let linked: Vec<_> = projects().into_iter().filter_map(|p| p.link).collect();
        assert_eq!(linked, vec![String::from("/projects/securevigil")]);
    }

    #[test]
    fn certifications_keep_authored_order() -> () {
        let certs = certifications();
        assert_eq!(certs.len(), 18);
        assert_eq!(certs[0].status, CertificationStatus::InView);
        assert_eq!(certs[2].name, "Red Team Mastery: Advanced Offensive Security");
        assert_eq!(certs.last().map(|c| c.name.as_str()), Some("Fundamentals of JavaScript"));
    }

    #[test]
    fn snippets_are_embedded() -> () {
        let snippets = securevigil_snippets();
        assert_eq!(snippets[0].key, "scanner");
        assert!(snippets.iter().all(|s| !s.source.trim().is_empty()));
        assert!(snippets[1].source.contains("def classify_risk"));
    }
}
