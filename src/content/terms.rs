// src/content/terms.rs

use std::sync::LazyLock;

use crate::models::question::MatchingTerm;

const THREATS: &str = "Threats";
const MEASURES: &str = "Security Measures";

const TERMS: &[(u32, &str, &str, &str)] = &[
    (1, "Phishing", "Fraudulent attempts to obtain sensitive information by disguising as trustworthy entities", THREATS),
    (2, "Malware", "Malicious software designed to harm, exploit, or otherwise compromise computer systems", THREATS),
    (3, "Two-Factor Authentication", "Security process requiring two different authentication factors to verify identity", MEASURES),
    (4, "VPN", "Virtual Private Network that creates secure connections over public networks", MEASURES),
    (5, "Social Engineering", "Psychological manipulation techniques used to trick people into divulging confidential information", THREATS),
    (6, "Encryption", "Process of converting information into a code to prevent unauthorized access", MEASURES),
    (7, "Firewall", "Network security system that monitors and controls incoming and outgoing network traffic", MEASURES),
    (8, "DDoS Attack", "Distributed Denial of Service attack, overwhelming a system with traffic to disrupt service", THREATS),
    (9, "Ransomware", "Malware that encrypts files and demands payment for their decryption", THREATS),
    (10, "Patch Management", "Process of applying updates to software to fix bugs or security vulnerabilities", MEASURES),
    (11, "Zero-Day Exploit", "A vulnerability that is unknown to the vendor and has no patch available", THREATS),
    (12, "Penetration Testing", "Simulated cyberattack against a computer system to check for exploitable vulnerabilities", MEASURES),
    (13, "Spear Phishing", "A highly targeted phishing attack tailored to specific individuals or organizations", THREATS),
    (14, "Intrusion Detection System (IDS)", "Monitors network traffic for suspicious activity and alerts security personnel", MEASURES),
    (15, "Keylogger", "Software that records every keystroke made on a computer", THREATS),
    (16, "Multi-Factor Authentication (MFA)", "An authentication method requiring two or more verification factors", MEASURES),
    (17, "SQL Injection", "A code injection technique used to attack data-driven applications", THREATS),
    (18, "Security Audit", "A systematic evaluation of the security of a company's information system", MEASURES),
    (19, "Brute-Force Attack", "A trial-and-error method used to obtain information such as user passwords or encryption keys", THREATS),
    (20, "Incident Response", "An organized approach to addressing and managing the aftermath of a security breach or cyberattack", MEASURES),
];

static POOL: LazyLock<Vec<MatchingTerm>> = LazyLock::new(|| {
    TERMS
        .iter()
        .map(|(id, term, definition, category)| MatchingTerm {
            id: *id,
            term: term.to_string(),
            definition: definition.to_string(),
            category: category.to_string(),
        })
        .collect()
});

pub fn terms() -> &'static [MatchingTerm] {
    &POOL
}
