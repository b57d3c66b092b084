use crate::cli::WrapMode;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from the rc file. Command-line flags take precedence over
/// anything found here.
#[derive(Debug, Clone)]
pub struct RcConfig {
    pub wrap: Option<WrapMode>,
    pub tab_stop: usize,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self {
            wrap: None,
            tab_stop: 4,
        }
    }
}

pub struct RcLoader;

impl RcLoader {
    /// Look for .minivimrc in the current directory, then in $HOME.
    pub fn rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(".minivimrc");
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(".minivimrc");
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Load the rc file if one exists. An unreadable file or an
    /// unrecognized setting falls back to the defaults silently.
    pub fn load_config() -> RcConfig {
        let mut config = RcConfig::default();
        if let Some(rc_path) = Self::rc_path() {
            if let Ok(content) = fs::read_to_string(&rc_path) {
                Self::parse_config_content(&content, &mut config);
            }
        }
        config
    }

    fn parse_config_content(content: &str, config: &mut RcConfig) {
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }
            Self::parse_config_line(line, config);
        }
    }

    fn parse_config_line(line: &str, config: &mut RcConfig) {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        let Some(setting) = line.strip_prefix("set ") else {
            return;
        };

        let setting = setting.trim();
        if let Some(value) = setting.strip_prefix("wrap=") {
            if let Some(wrap) = WrapMode::parse(value) {
                config.wrap = Some(wrap);
            }
        } else if let Some(value) = setting.strip_prefix("tabstop=") {
            if let Ok(tab_stop) = value.parse::<usize>() {
                if tab_stop > 0 && tab_stop <= 16 {
                    config.tab_stop = tab_stop;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings() {
        let mut config = RcConfig::default();
        let content = r#"
            set wrap=break
            set tabstop=8
        "#;
        RcLoader::parse_config_content(content, &mut config);
        assert_eq!(config.wrap, Some(WrapMode::Break));
        assert_eq!(config.tab_stop, 8);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let mut config = RcConfig::default();
        let content = r#"
            # a comment
            " another comment style

            set tabstop=2    # trailing comment
        "#;
        RcLoader::parse_config_content(content, &mut config);
        assert_eq!(config.tab_stop, 2);
        assert_eq!(config.wrap, None);
    }

    #[test]
    fn test_invalid_values_ignored() {
        let mut config = RcConfig::default();
        let content = r#"
            set wrap=fold
            set tabstop=0
            set tabstop=40
            set unknown=thing
            tabstop=2
        "#;
        RcLoader::parse_config_content(content, &mut config);
        assert_eq!(config.wrap, None);
        assert_eq!(config.tab_stop, 4);
    }
}
