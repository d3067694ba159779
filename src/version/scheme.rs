//! Versioning scheme identifiers

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

/// Package ecosystem selecting both the native range grammar and the
/// version ordering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// npm (package.json)
    Npm,
    /// crates.io (Cargo.toml)
    Cargo,
    /// RubyGems (Gemfile)
    Gem,
    /// PyPI (requirements.txt, pyproject.toml)
    Pypi,
    /// Maven (pom.xml)
    Maven,
    /// NuGet (.csproj)
    Nuget,
    /// Go modules (go.mod)
    Go,
    /// Debian packages
    Debian,
    /// RPM packages
    Rpm,
    /// Any other scheme; uses the generic grammar and ordering
    Other(Arc<str>),
    /// No scheme at all
    #[default]
    Generic,
}

impl Scheme {
    /// Resolve a scheme tag, accepting the usual aliases.
    ///
    /// Unknown tags are not an error: they map to [`Scheme::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "npm" => Scheme::Npm,
            "cargo" => Scheme::Cargo,
            "gem" | "rubygems" => Scheme::Gem,
            "pypi" => Scheme::Pypi,
            "maven" => Scheme::Maven,
            "nuget" => Scheme::Nuget,
            "go" | "golang" => Scheme::Go,
            "deb" | "debian" => Scheme::Debian,
            "rpm" => Scheme::Rpm,
            "" => Scheme::Generic,
            other => Scheme::Other(Arc::from(other)),
        }
    }

    /// Returns the canonical string representation of the scheme
    pub fn as_str(&self) -> &str {
        match self {
            Scheme::Npm => "npm",
            Scheme::Cargo => "cargo",
            Scheme::Gem => "gem",
            Scheme::Pypi => "pypi",
            Scheme::Maven => "maven",
            Scheme::Nuget => "nuget",
            Scheme::Go => "golang",
            Scheme::Debian => "deb",
            Scheme::Rpm => "rpm",
            Scheme::Other(name) => name,
            Scheme::Generic => "",
        }
    }

    /// Go keeps the leading `v` of its versions verbatim
    pub fn preserves_v_prefix(&self) -> bool {
        matches!(self, Scheme::Go)
    }

    /// Schemes whose versions are rendered as `MAJOR.MINOR.PATCH` in vers URIs
    pub fn is_semver_flavored(&self) -> bool {
        matches!(self, Scheme::Npm | Scheme::Cargo)
    }
}

impl std::str::FromStr for Scheme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Scheme::from_name(s))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
