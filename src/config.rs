use crate::error::Error;
use ini::Ini;
use std::path::Path;

/// Location of the warehouse settings file, relative to the working
/// directory of either binary.
pub const CONFIG_PATH: &str = "config/dwh.cfg";

/// Parsed warehouse settings.
///
/// Thin wrapper over the INI tree. Sections are looked up lazily, so an
/// unreadable file degrades to an empty config and missing data surfaces
/// as an error at first access rather than at load.
pub struct Config(Ini);

impl Config {
    /// Reads settings from an INI file.
    ///
    /// An unreadable file yields an empty config, not an error; malformed
    /// contents yield [`Error::Parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        match Ini::load_from_file(path.as_ref()) {
            Ok(ini) => Ok(Self(ini)),
            Err(ini::Error::Parse(e)) => Err(Error::Parse(e)),
            Err(ini::Error::Io(_)) => {
                log::warn!("no config at {}, starting empty", path.as_ref().display());
                Ok(Self(Ini::new()))
            }
        }
    }

    /// Required-key lookup.
    pub fn get(&self, section: &'static str, key: &'static str) -> Result<&str, Error> {
        self.0
            .section(Some(section))
            .ok_or(Error::Section(section))?
            .get(key)
            .ok_or(Error::Key { section, key })
    }

    /// Builds the libpq-style connection string from the [CLUSTER] section.
    ///
    /// Values are interpolated positionally, in file order: host, dbname,
    /// user, password, port.
    pub fn connection_string(&self) -> Result<String, Error> {
        let cluster = self
            .0
            .section(Some("CLUSTER"))
            .ok_or(Error::Section("CLUSTER"))?;
        let values = cluster.iter().map(|(_, v)| v).collect::<Vec<_>>();
        match values[..] {
            [host, dbname, user, password, port] => Ok(format!(
                "host={} dbname={} user={} password={} port={}",
                host, dbname, user, password, port
            )),
            _ => Err(Error::Cluster(values.len())),
        }
    }
}
