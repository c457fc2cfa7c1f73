// src/content/true_false.rs

use std::sync::LazyLock;

use crate::models::question::TrueFalseQuestion;

const STATEMENTS: &[(u32, &str, bool, &str)] = &[
    (1, "Using the same password for multiple accounts is a safe practice.", false,
     "If one account is compromised, every account sharing that password becomes vulnerable."),
    (2, "Two-factor authentication significantly increases account security.", true,
     "It requires a second form of verification beyond just your password."),
    (3, "It's safe to connect to any public Wi-Fi network for online banking.", false,
     "Public Wi-Fi is not secure and should never be used for banking without a VPN."),
    (4, "Phishing emails always contain obvious spelling and grammar mistakes.", false,
     "Modern phishing emails can be well-written, so language alone is not a reliable signal."),
    (5, "Software updates should be installed as soon as they become available.", true,
     "Updates often contain security patches that fix known vulnerabilities."),
    (6, "Private browsing mode makes you completely anonymous online.", false,
     "It only avoids storing browsing data locally; your ISP, websites and network admins can still track you."),
    (7, "A strong password must be at least 12 characters long.", true,
     "At least 12 characters gives adequate protection against brute-force attacks."),
    (8, "Antivirus software alone is sufficient to protect against all cyber threats.", false,
     "Security needs several layers: firewalls, safe browsing habits and regular updates as well."),
    (9, "It is safe to click on links from unknown senders if the email looks legitimate.", false,
     "Links from unknown senders can lead to phishing sites or malware downloads."),
    (10, "Using a VPN encrypts your internet connection.", true,
     "A VPN encrypts your traffic, making it more secure and private."),
    (11, "Ransomware encrypts your files and demands a payment.", true,
     "Ransomware locks your files and demands a ransom, usually in cryptocurrency."),
    (12, "You should regularly back up your important data.", true,
     "Backups protect against loss from hardware failure, theft or cyberattacks."),
    (13, "All pop-up windows are malicious and should be closed immediately.", false,
     "Some legitimate sites use pop-ups for notifications or login prompts. Verify the source."),
    (14, "A firewall helps protect your computer from unauthorized access.", true,
     "A firewall filters incoming and outgoing traffic to block unauthorized access."),
    (15, "Sharing your Netflix password with friends is harmless.", false,
     "Sharing passwords can violate terms of service and expose your account to misuse."),
    (16, "HTTPS in a website URL means the connection is secure.", true,
     "HTTPS means traffic between your browser and the site is encrypted."),
    (17, "It's okay to reuse old passwords if they were strong initially.", false,
     "An old password that was ever compromised stays exposed to credential stuffing."),
    (18, "Social engineering relies on technical hacking skills to gain access.", false,
     "Social engineering manipulates people with psychological tactics, not technical skills."),
    (19, "Keeping your operating system updated is crucial for security.", true,
     "OS updates include critical patches against newly discovered vulnerabilities."),
    (20, "You should always use public charging stations for your mobile devices.", false,
     "Public charging stations can be compromised ('juice jacking') to install malware or steal data."),
];

static POOL: LazyLock<Vec<TrueFalseQuestion>> = LazyLock::new(|| {
    STATEMENTS
        .iter()
        .map(|(id, statement, correct, explanation)| TrueFalseQuestion {
            id: *id,
            statement: statement.to_string(),
            correct: *correct,
            explanation: explanation.to_string(),
        })
        .collect()
});

pub fn questions() -> &'static [TrueFalseQuestion] {
    &POOL
}
