use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::syntax::DEFAULT_NAV_CLASS;

/// Block syntaxes the parser recognizes.
/// Fenced containers are the point of this crate; the rest form the host
/// grammar they nest into and can be switched off individually.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Extensions {
    /// `:::{#id .class}` ... `:::` containers
    pub fenced_containers: bool,
    /// ```` ``` ```` and `~~~` code blocks
    pub fenced_code_blocks: bool,
    /// Code blocks indented by four columns
    pub indented_code_blocks: bool,
    /// `#` through `######` headings
    pub atx_headings: bool,
    /// `---`, `***` and `___`
    pub thematic_breaks: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            fenced_containers: true,
            fenced_code_blocks: true,
            indented_code_blocks: true,
            atx_headings: true,
            thematic_breaks: true,
        }
    }
}

/// Settings for fenced containers.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FenceOptions {
    /// Delimiter character of the marker run.
    pub marker: char,
    /// Shortest marker run that opens a container.
    pub min_length: usize,
    /// Openers nested deeper than this are left as plain text.
    pub max_depth: usize,
    /// Class that renders a container as `<nav>` instead of `<div>`.
    pub nav_class: String,
    /// Position among the block rules; lower runs first.
    pub priority: i32,
}

impl Default for FenceOptions {
    fn default() -> Self {
        Self {
            marker: ':',
            min_length: 3,
            max_depth: 64,
            nav_class: DEFAULT_NAV_CLASS.to_string(),
            priority: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit void elements as `<hr />`.
    pub xhtml: bool,
    /// Drop container attributes that are not global HTML attributes.
    pub filter_attributes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            xhtml: false,
            filter_attributes: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub extensions: Extensions,
    pub fences: FenceOptions,
    pub render: RenderOptions,
}

impl Config {
    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), String> {
        let fences = &self.fences;
        if !fences.marker.is_ascii_punctuation() {
            return Err(format!(
                "fences.marker must be an ASCII punctuation character, got {:?}",
                fences.marker
            ));
        }
        if fences.min_length < 3 {
            return Err(format!(
                "fences.min_length must be at least 3, got {}",
                fences.min_length
            ));
        }
        if fences.max_depth == 0 {
            return Err("fences.max_depth must be at least 1".to_string());
        }
        if fences.nav_class.is_empty() || fences.nav_class.contains(char::is_whitespace) {
            return Err(format!(
                "fences.nav_class must be a single class name, got {:?}",
                fences.nav_class
            ));
        }
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.config.extensions = extensions;
        self
    }

    pub fn marker(mut self, marker: char) -> Self {
        self.config.fences.marker = marker;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.config.fences.min_length = length;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.fences.max_depth = depth;
        self
    }

    pub fn nav_class(mut self, class: impl Into<String>) -> Self {
        self.config.fences.nav_class = class.into();
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.config.fences.priority = priority;
        self
    }

    pub fn xhtml(mut self, xhtml: bool) -> Self {
        self.config.render.xhtml = xhtml;
        self
    }

    pub fn filter_attributes(mut self, filter: bool) -> Self {
        self.config.render.filter_attributes = filter;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".fences.toml", "fences.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    let invalid = |msg: String| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {msg}", path.display()),
        )
    };
    let config = toml::from_str::<Config>(s).map_err(|e| invalid(e.to_string()))?;
    config.validate().map_err(invalid)?;
    Ok(config)
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("fences").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("fences")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .fences.toml, fences.toml
/// 3) XDG: $XDG_CONFIG_HOME/fences/config.toml or ~/.config/fences/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring config: {e}"),
        }
    }

    if let Some(p) = xdg_config_path() {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring config: {e}"),
        }
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
