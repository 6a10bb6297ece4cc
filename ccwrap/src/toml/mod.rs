use crate::utils::{paths, IResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;


/// Loads a sidecar configuration file.
///
/// Returns the parsed file together with a warning for every key that was
/// not understood.
pub fn read_config(path: &Path) -> IResult<(TomlConfig, Vec<String>)> {
    let contents = paths::read_string(path)?;
    let (config, unused) = parse_config(&contents)
        .map_err(|e| e.context(format!("failed to parse `{}`", path.display())))?;

    let warnings = unused
        .into_iter()
        .map(|key| format!("unused config key `{}` in `{}`", key, path.display()))
        .collect();
    Ok((config, warnings))
}

fn parse_config(contents: &str) -> IResult<(TomlConfig, BTreeSet<String>)> {
    let toml: toml::Value = contents.parse()
        .map_err(|e| anyhow::Error::from(e).context("could not parse input as TOML"))?;

    let mut unused = BTreeSet::new();
    let config: TomlConfig = serde_ignored::deserialize(toml, |path| {
        let mut key = String::new();
        stringify(&mut key, &path);
        unused.insert(key);
    })?;

    return Ok((config, unused));

    fn stringify(dst: &mut String, path: &serde_ignored::Path<'_>) {
        use serde_ignored::Path;

        match *path {
            Path::Root => {}
            Path::Seq { parent, index } => {
                stringify(dst, parent);
                if !dst.is_empty() {
                    dst.push('.');
                }
                dst.push_str(&index.to_string());
            }
            Path::Map { parent, ref key } => {
                stringify(dst, parent);
                if !dst.is_empty() {
                    dst.push('.');
                }
                dst.push_str(key);
            }
            Path::Some { parent }
            | Path::NewtypeVariant { parent }
            | Path::NewtypeStruct { parent } => stringify(dst, parent),
        }
    }
}


/// Sidecar configuration, e.g. `ccwrap.toml` next to the `ccwrap` executable:
///
/// ```toml
/// real-cc = "/usr/bin/clang"
/// real-cxx = "/usr/bin/clang++"
/// cxxflags = "-stdlib=libc++"
/// verbose = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TomlConfig {
    pub real_cc: Option<String>,
    pub real_cxx: Option<String>,
    pub cxxflags: Option<String>,
    pub verbose: Option<bool>,
}
