//! Site-wide fixed values. No runtime configuration: everything a section
//! needs to know about the owner lives here.

pub const OWNER_NAME: &str = "Iris Calloway";
pub const TAGLINE: &str = "Building fast, reliable software for the web";
pub const CONTACT_EMAIL: &str = "hello@iriscalloway.dev";
pub const GITHUB_URL: &str = "https://github.com/icalloway";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/iriscalloway";
pub const RESUME_PATH: &str = "/Iris_Calloway_Resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Iris_Calloway_Resume.pdf";
