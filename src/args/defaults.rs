use std::path::PathBuf;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("rtmon/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_ENVIRONMENT: &str = "local";

pub(crate) fn default_results_dir() -> String {
    default_base_dir()
        .join("results")
        .to_string_lossy()
        .into_owned()
}

fn default_base_dir() -> PathBuf {
    if let Some(home) = user_home_dir() {
        return home.join(".rtmon");
    }

    PathBuf::from(".rtmon")
}

fn user_home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        if let Some(value) = std::env::var_os("USERPROFILE") {
            return Some(PathBuf::from(value));
        }
        let drive = std::env::var_os("HOMEDRIVE");
        let path = std::env::var_os("HOMEPATH");
        if let (Some(drive), Some(path)) = (drive, path) {
            let mut full = PathBuf::from(drive);
            full.push(path);
            return Some(full);
        }
    }

    if let Some(value) = std::env::var_os("HOME") {
        return Some(PathBuf::from(value));
    }

    None
}
