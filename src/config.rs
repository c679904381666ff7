use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::editor::BufferLimits;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub line_size: Option<usize>,
    pub initial_capacity: Option<usize>,
    pub grow_step: Option<usize>,
    pub quiet: bool,
    pub perf: bool,
    pub session_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            line_size: other.line_size.or(self.line_size),
            initial_capacity: other.initial_capacity.or(self.initial_capacity),
            grow_step: other.grow_step.or(self.grow_step),
            quiet: self.quiet || other.quiet,
            perf: self.perf || other.perf,
            session_log: other
                .session_log
                .clone()
                .or_else(|| self.session_log.clone()),
        }
    }

    /// Buffer limits with defaults filled in.
    ///
    /// # Errors
    ///
    /// Returns an error if the line size or grow step is zero.
    pub fn limits(&self) -> Result<BufferLimits> {
        let defaults = BufferLimits::default();
        let limits = BufferLimits {
            line_size: self.line_size.unwrap_or(defaults.line_size),
            initial_capacity: self.initial_capacity.unwrap_or(defaults.initial_capacity),
            grow_step: self.grow_step.unwrap_or(defaults.grow_step),
        };
        if limits.line_size == 0 {
            bail!("--line-size must be at least 1");
        }
        if limits.grow_step == 0 {
            bail!("--grow-step must be at least 1");
        }
        Ok(limits)
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("lined").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("lined")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("lined").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("lined").join("config");
        }
    }

    PathBuf::from(".linedrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".linedrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# lined defaults (saved with --save)".to_string());
    if let Some(size) = flags.line_size {
        lines.push(format!("--line-size {size}"));
    }
    if let Some(capacity) = flags.initial_capacity {
        lines.push(format!("--initial-capacity {capacity}"));
    }
    if let Some(step) = flags.grow_step {
        lines.push(format!("--grow-step {step}"));
    }
    if flags.quiet {
        lines.push("--quiet".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.session_log {
        lines.push(format!("--session-log {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--quiet" {
            flags.quiet = true;
        } else if token == "--perf" {
            flags.perf = true;
        } else if let Some((name, value)) = token.split_once('=') {
            apply_valued(&mut flags, name, value);
        } else if is_valued(token) {
            if let Some(next) = tokens.get(i + 1) {
                apply_valued(&mut flags, token, next);
                i += 1;
            }
        }
        i += 1;
    }
    flags
}

fn is_valued(name: &str) -> bool {
    matches!(
        name,
        "--line-size" | "--initial-capacity" | "--grow-step" | "--session-log"
    )
}

fn apply_valued(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--line-size" => flags.line_size = value.parse().ok(),
        "--initial-capacity" => flags.initial_capacity = value.parse().ok(),
        "--grow-step" => flags.grow_step = value.parse().ok(),
        "--session-log" => flags.session_log = Some(PathBuf::from(value)),
        _ => {}
    }
}
