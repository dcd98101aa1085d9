use crate::release_note::template::PR_TEMPLATE;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

const DEFAULT_BRANCH_NAME: &str = "master";
const DEFAULT_CONFIG_FILE_NAME: &str = "release-note.yaml";
const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_REPOSITORIES_PAGE_SIZE: u32 = 100;
const HEAD: &str = "HEAD";

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing {0} flag")]
    MissingFlag(&'static str),
    #[error("malformed repository flag value: {0}, expected owner/name")]
    MalformedRepository(String),
    #[error("cannot read config file {path}")]
    ReadConfigFile {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
    #[error("cannot parse config file {path}")]
    ParseConfigFile {
        path: PathBuf,
        #[source]
        cause: serde_yaml::Error,
    },
}

/// Prints the release notes of the pull requests merged between two commits
#[derive(Debug, Default, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Your github handle
    #[arg(long)]
    pub user: Option<String>,

    /// Your github token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// The github repository to inspect, in owner/name format
    #[arg(long)]
    pub repository: Option<String>,

    /// The older commit (excluded)
    #[arg(long)]
    pub from: Option<String>,

    /// The newer commit (included), defaults to HEAD
    #[arg(long, default_value = HEAD)]
    pub to: String,

    /// The branch whose history is inspected
    #[arg(long)]
    pub branch: Option<String>,

    /// Optional yaml file with extra settings
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Enable debug logs
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileConfig {
    pub branch: Option<String>,
    #[serde(default = "FileConfig::default_page_size")]
    pub page_size: u32,
    #[serde(default = "FileConfig::default_repositories_page_size")]
    pub repositories_page_size: u32,
    #[serde(default = "FileConfig::default_api_url")]
    pub api_url: String,
    pub template: Option<Vec<String>>,
}

impl FileConfig {
    fn default_page_size() -> u32 {
        DEFAULT_PAGE_SIZE
    }

    fn default_repositories_page_size() -> u32 {
        DEFAULT_REPOSITORIES_PAGE_SIZE
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }

    /// Reads the file at `path`, falling back to defaults when it does not exist
    pub async fn load(path: &Path) -> Result<FileConfig, Error> {
        let config_string = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(cause) if cause.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config file at {}, using defaults", path.display());
                return Ok(FileConfig::default());
            }
            Err(cause) => {
                return Err(Error::ReadConfigFile {
                    path: path.to_owned(),
                    cause,
                })
            }
        };

        serde_yaml::from_str::<FileConfig>(&config_string).map_err(|cause| {
            Error::ParseConfigFile {
                path: path.to_owned(),
                cause,
            }
        })
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        FileConfig {
            branch: None,
            page_size: DEFAULT_PAGE_SIZE,
            repositories_page_size: DEFAULT_REPOSITORIES_PAGE_SIZE,
            api_url: DEFAULT_API_URL.to_owned(),
            template: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepositoryRef {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(RepositoryRef {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::MalformedRepository(value.to_owned())),
        }
    }
}

impl Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Upper bound of the walked range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// Whatever the branch currently points at
    Head,
    Sha(String),
}

impl From<&str> for Revision {
    fn from(value: &str) -> Self {
        if value == HEAD {
            Revision::Head
        } else {
            Revision::Sha(value.to_owned())
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub user: String,
    pub token: String,
    pub repository: RepositoryRef,
    pub branch: String,
    pub from: String,
    pub to: Revision,
    pub page_size: u32,
    pub repositories_page_size: u32,
    pub api_url: String,
    pub template: Vec<String>,
}

impl Config {
    pub async fn load(cli: Cli) -> Result<Config, Error> {
        let file = FileConfig::load(&cli.config).await?;
        Config::merge(cli, file)
    }

    /// Flags win over file values; required flags are checked before anything else
    pub fn merge(cli: Cli, file: FileConfig) -> Result<Config, Error> {
        let user = required(cli.user, "user")?;
        let token = required(cli.token, "token")?;
        let repository = required(cli.repository, "repository")?.parse::<RepositoryRef>()?;
        let from = required(cli.from, "from")?;

        let branch = cli
            .branch
            .or(file.branch)
            .unwrap_or_else(|| DEFAULT_BRANCH_NAME.to_owned());

        let template = file
            .template
            .unwrap_or_else(|| PR_TEMPLATE.iter().map(|line| line.to_string()).collect());

        Ok(Config {
            user,
            token,
            repository,
            branch,
            from,
            to: Revision::from(cli.to.as_str()),
            page_size: file.page_size,
            repositories_page_size: file.repositories_page_size,
            api_url: file.api_url,
            template,
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, Error> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingFlag(name)),
    }
}
