// src/content/quiz.rs

use std::sync::LazyLock;

use crate::models::question::QuizQuestion;

type Row = (u32, &'static str, [&'static str; 4], usize, &'static str);

const QUESTIONS: &[Row] = &[
    (
        1,
        "What makes a password strong?",
        [
            "Using your name and birth year",
            "At least 12 characters with mixed case, numbers, and symbols",
            "Using 'password123'",
            "Using the same password everywhere",
        ],
        1,
        "Strong passwords should be at least 12 characters long and include uppercase, lowercase, numbers, and symbols.",
    ),
    (
        2,
        "What is phishing?",
        [
            "Catching fish with a net",
            "A type of computer virus",
            "Fraudulent attempts to obtain sensitive information",
            "A programming language",
        ],
        2,
        "Phishing is a social engineering attack where criminals try to trick you into revealing sensitive information like passwords or credit card numbers.",
    ),
    (
        3,
        "When should you install software updates?",
        [
            "Never, they might break things",
            "Only when you have time",
            "As soon as they're available, especially security updates",
            "Once a year",
        ],
        2,
        "Security updates should be installed promptly as they fix vulnerabilities that could be exploited by attackers.",
    ),
    (
        4,
        "Is it safe to use public Wi-Fi for online banking?",
        [
            "Yes, it's always safe",
            "No, never use public Wi-Fi for sensitive activities",
            "Only on weekends",
            "Only if the network has a password",
        ],
        1,
        "Public Wi-Fi networks are not secure. Never access sensitive accounts like banking on public networks unless using a VPN.",
    ),
    (
        5,
        "What is two-factor authentication (2FA)?",
        [
            "Using two passwords",
            "An extra security layer requiring a second form of verification",
            "A type of malware",
            "Having two email accounts",
        ],
        1,
        "2FA adds an extra layer of security by requiring something you know (password) and something you have (phone, token, etc.).",
    ),
    (
        6,
        "What is malware?",
        [
            "Software that helps you organize files",
            "Malicious software designed to harm or exploit computer systems",
            "A type of computer hardware",
            "A tool for graphic design",
        ],
        1,
        "Malware is a general term for malicious software like viruses, worms, Trojans, and ransomware.",
    ),
    (
        7,
        "Why is it important to back up your data?",
        [
            "To free up space on your main drive",
            "To share files with friends easily",
            "To protect against data loss from hardware failure, theft, or cyberattack",
            "To make your computer run faster",
        ],
        2,
        "Backing up data ensures you can recover your important files if they are lost or corrupted.",
    ),
    (
        8,
        "What is a VPN (Virtual Private Network)?",
        [
            "A new type of Wi-Fi router",
            "A service that encrypts your internet connection and hides your IP address",
            "A video streaming platform",
            "A tool for creating virtual machines",
        ],
        1,
        "A VPN creates a secure, encrypted connection over a less secure network, like the internet, protecting your online privacy and security.",
    ),
    (
        9,
        "What should you do if you receive a suspicious email?",
        [
            "Click on all links immediately",
            "Reply asking for more information",
            "Delete it without opening or report it if possible, and do not click links or attachments",
            "Forward it to all your contacts",
        ],
        2,
        "Suspicious emails often contain phishing attempts or malware. It's best to delete them or report them to your IT department.",
    ),
    (
        10,
        "What is ransomware?",
        [
            "Software that helps you manage your finances",
            "A type of malware that encrypts your files and demands payment for their release",
            "A tool for optimizing computer performance",
            "A game played online",
        ],
        1,
        "Ransomware holds your data hostage by encrypting it until a ransom is paid, usually in cryptocurrency.",
    ),
    (
        11,
        "How can you identify a secure website?",
        [
            "It has a lot of pop-up ads",
            "The URL starts with 'http://'",
            "The URL starts with 'https://' and shows a padlock icon",
            "It loads very quickly",
        ],
        2,
        "HTTPS indicates that the connection to the website is encrypted, protecting your data in transit.",
    ),
    (
        12,
        "What is social engineering?",
        [
            "Designing social media platforms",
            "Manipulating people into performing actions or divulging confidential information",
            "A method for building strong relationships",
            "Studying human behavior in groups",
        ],
        1,
        "Social engineering relies on human interaction and deception to trick individuals into breaking security procedures.",
    ),
    (
        13,
        "Why should you avoid clicking on suspicious links?",
        [
            "They might lead to boring websites",
            "They can lead to malware downloads or phishing sites",
            "They slow down your internet connection",
            "They are usually just advertisements",
        ],
        1,
        "Clicking suspicious links can expose you to malware, phishing scams, or other malicious content.",
    ),
    (
        14,
        "What is a firewall?",
        [
            "A wall made of fire",
            "A network security system that monitors and controls incoming and outgoing network traffic",
            "A tool for extinguishing fires",
            "A type of computer game",
        ],
        1,
        "A firewall acts as a barrier between your internal network and external networks, filtering traffic to prevent unauthorized access.",
    ),
    (
        15,
        "Is it safe to share your password with a colleague if they promise to keep it secret?",
        [
            "Yes, if you trust them",
            "No, never share your passwords with anyone",
            "Only if your manager approves",
            "Only for a short period",
        ],
        1,
        "Sharing passwords compromises security. Use secure methods like password managers or shared accounts if necessary.",
    ),
    (
        16,
        "What is data encryption?",
        [
            "Making data publicly available",
            "Converting data into a code to prevent unauthorized access",
            "Deleting data permanently",
            "Organizing data into spreadsheets",
        ],
        1,
        "Encryption transforms data into an unreadable format, making it secure from unauthorized viewing.",
    ),
    (
        17,
        "What is a strong indicator of a potential scam website?",
        [
            "It has a professional design",
            "It asks for your social security number via email",
            "It uses a common domain name like google.com",
            "It offers free software downloads",
        ],
        1,
        "Legitimate websites will rarely ask for sensitive personal information like SSN via email or insecure forms.",
    ),
    (
        18,
        "What is the principle of least privilege?",
        [
            "Giving everyone full access to all systems",
            "Granting users only the minimum necessary access rights to perform their job functions",
            "Allowing users to choose their own access levels",
            "Restricting access only to administrators",
        ],
        1,
        "Least privilege minimizes the potential damage from a compromised account by limiting what that account can do.",
    ),
    (
        19,
        "How often should you change your passwords?",
        [
            "Never, if they are strong",
            "Every few years, or immediately if there's a security breach",
            "Every day",
            "Only when you forget them",
        ],
        1,
        "Strong, unique passwords don't need frequent changes, but change them immediately if a breach is suspected.",
    ),
    (
        20,
        "What is a 'zero-day' vulnerability?",
        [
            "A vulnerability that has been known for zero days",
            "A newly discovered software flaw for which no patch is yet available",
            "A vulnerability that affects zero users",
            "A vulnerability that can be fixed in zero days",
        ],
        1,
        "A zero-day vulnerability is a flaw unknown to the vendor, leaving zero days to fix it before it might be exploited.",
    ),
];

static POOL: LazyLock<Vec<QuizQuestion>> = LazyLock::new(|| {
    QUESTIONS
        .iter()
        .map(|(id, question, options, correct, explanation)| QuizQuestion {
            id: *id,
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct: *correct,
            explanation: explanation.to_string(),
        })
        .collect()
});

/// The full multiple-choice bank.
pub fn questions() -> &'static [QuizQuestion] {
    &POOL
}
