//! Content registry for the PathSim homepage.
//!
//! Single source of truth for package metadata, navigation links, and
//! marketing copy. Package URLs are derived from the external host
//! constants so a host move is a one-line change.

use serde::Serialize;
use std::sync::OnceLock;

/// Process-wide external base URLs.
pub mod external {
    /// Documentation host.
    pub const DOCS: &str = "https://docs.pathsim.org";
    /// Live browser editor (PathView).
    pub const VIEW: &str = "https://view.pathsim.org";
    /// Source-host organization.
    pub const GITHUB: &str = "https://github.com/pathsim";
    /// Package-registry project prefix.
    pub const PYPI: &str = "https://pypi.org/project";
    /// Sponsorship link.
    pub const SPONSOR: &str = "https://github.com/sponsors/milanofthe";
}

/// CDN URLs for external resources used by the rendered pages.
pub mod cdn {
    pub const FONT_INTER: &str =
        "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";
    pub const FONT_JETBRAINS_MONO: &str =
        "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;500&display=swap";
    pub const FONT_COMBINED: &str =
        "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=JetBrains+Mono:wght@400;500&display=swap";
}

/// Display metadata for one ecosystem package.
#[derive(Debug, Clone, Serialize)]
pub struct Package {
    /// Stable identifier, also the screenshot filename stem.
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    /// Logo asset path relative to the static root.
    pub logo: &'static str,
    pub docs: String,
    pub api: Option<String>,
    pub examples: Option<String>,
    pub pypi: Option<String>,
    pub github: String,
    /// Live in-browser app, if the package has one.
    pub app: Option<String>,
}

/// Packages in ecosystem display order.
pub fn packages() -> &'static [Package] {
    static PACKAGES: OnceLock<Vec<Package>> = OnceLock::new();
    PACKAGES
        .get_or_init(|| {
            vec![
                Package {
                    id: "pathview",
                    name: "PathView",
                    short_name: "pathview",
                    logo: "/pathview_logo.png",
                    docs: external::VIEW.to_string(),
                    api: None,
                    examples: None,
                    pypi: None,
                    github: format!("{}/pathview", external::GITHUB),
                    app: Some(external::VIEW.to_string()),
                },
                Package {
                    id: "pathsim",
                    name: "PathSim",
                    short_name: "pathsim",
                    logo: "/pathsim_logo.png",
                    docs: format!("{}/pathsim", external::DOCS),
                    api: Some(format!("{}/pathsim/api", external::DOCS)),
                    examples: Some(format!("{}/pathsim/examples", external::DOCS)),
                    pypi: Some(format!("{}/pathsim", external::PYPI)),
                    github: format!("{}/pathsim", external::GITHUB),
                    app: None,
                },
                Package {
                    id: "chem",
                    name: "PathSim-Chem",
                    short_name: "chem",
                    logo: "/pathsim_chem_logo.png",
                    docs: format!("{}/chem", external::DOCS),
                    api: Some(format!("{}/chem/api", external::DOCS)),
                    examples: Some(format!("{}/chem/examples", external::DOCS)),
                    pypi: Some(format!("{}/pathsim-chem", external::PYPI)),
                    github: format!("{}/pathsim-chem", external::GITHUB),
                    app: None,
                },
                Package {
                    id: "vehicle",
                    name: "PathSim-Vehicle",
                    short_name: "vehicle",
                    logo: "/pathsim_vehicle_logo.png",
                    docs: format!("{}/vehicle", external::DOCS),
                    api: Some(format!("{}/vehicle/api", external::DOCS)),
                    examples: Some(format!("{}/vehicle/examples", external::DOCS)),
                    pypi: Some(format!("{}/pathsim-vehicle", external::PYPI)),
                    github: format!("{}/pathsim-vehicle", external::GITHUB),
                    app: None,
                },
            ]
        })
        .as_slice()
}

/// Look up a package by identifier.
pub fn package(id: &str) -> Option<&'static Package> {
    packages().iter().find(|p| p.id == id)
}

/// Header navigation links.
#[derive(Debug, Clone, Serialize)]
pub struct NavLinks {
    pub get_started: String,
    pub docs: String,
    pub try_online: String,
    pub github: String,
    pub sponsor: String,
}

pub fn nav() -> &'static NavLinks {
    static NAV: OnceLock<NavLinks> = OnceLock::new();
    NAV.get_or_init(|| NavLinks {
        get_started: format!("{}/pathsim/getting-started", external::DOCS),
        docs: external::DOCS.to_string(),
        try_online: external::VIEW.to_string(),
        github: format!("{}/pathsim", external::GITHUB),
        sponsor: external::SPONSOR.to_string(),
    })
}

/// Footer links.
#[derive(Debug, Clone, Serialize)]
pub struct FooterLinks {
    pub docs: String,
    pub github: String,
    pub pypi: String,
}

pub fn footer() -> &'static FooterLinks {
    static FOOTER: OnceLock<FooterLinks> = OnceLock::new();
    FOOTER.get_or_init(|| FooterLinks {
        docs: external::DOCS.to_string(),
        github: format!("{}/pathsim", external::GITHUB),
        pypi: format!("{}/pathsim", external::PYPI),
    })
}

/// Hero section copy.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hero {
    pub tagline: &'static str,
    pub description: &'static str,
    pub meta_description: &'static str,
}

pub const HERO: Hero = Hero {
    tagline: "Python native System modeling",
    description: "Build, simulate, and analyze continuous-time, discrete-time, and hybrid \
         systems using intuitive block diagrams. From simple ODEs to complex \
         multi-domain simulations.",
    meta_description: "PathSim is a Python framework for simulating dynamical systems using \
         block diagrams. Build, simulate, and analyze continuous-time, \
         discrete-time, and hybrid systems.",
};

/// One install command shown in the installation section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InstallCommand {
    pub name: &'static str,
    pub command: &'static str,
}

pub const INSTALLATION: [InstallCommand; 2] = [
    InstallCommand {
        name: "pip",
        command: "pip install pathsim",
    },
    InstallCommand {
        name: "conda",
        command: "conda install -c conda-forge pathsim",
    },
];

/// One feature tile.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 8] = [
    Feature {
        title: "Hot-Swappable",
        description: "Switch blocks and solvers during active simulation at runtime.",
    },
    Feature {
        title: "MIMO Capable",
        description: "Multiple input, multiple output ports built into all blocks.",
    },
    Feature {
        title: "18+ Solvers",
        description: "Implicit, explicit, and adaptive integrators for stiff and non-stiff systems.",
    },
    Feature {
        title: "Hierarchical",
        description: "Nested subsystems for modular, reusable component design.",
    },
    Feature {
        title: "Event Handling",
        description: "Zero-crossing detection and scheduled events for hybrid systems.",
    },
    Feature {
        title: "Extensible",
        description: "Create custom blocks by subclassing the base Block class.",
    },
    Feature {
        title: "Browser Editor",
        description: "Design and simulate visually with PathView using Pyodide.",
    },
    Feature {
        title: "Domain Toolboxes",
        description: "Specialized blocks for chemical engineering and vehicle dynamics.",
    },
];

/// Hero example snippet.
pub const EXAMPLE_CODE: &str = r#"from pathsim import Simulation, Connection
from pathsim.blocks import Integrator, Amplifier, Scope

# blocks
integ = Integrator(1.0)
amp = Amplifier(-0.5)
scope = Scope()

# connections (feedback loop)
connections = [
    Connection(integ, amp, scope),
    Connection(amp, integ)
]

# simulate
sim = Simulation([integ, amp, scope], connections)
sim.run(10.0)
scope.plot()"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packages_in_display_order() {
        let ids: Vec<&str> = packages().iter().map(|p| p.id).collect();
        assert_eq!(ids, ["pathview", "pathsim", "chem", "vehicle"]);
    }

    #[test]
    fn lookup_by_id() {
        let chem = package("chem").expect("chem registered");
        assert_eq!(chem.name, "PathSim-Chem");
        assert_eq!(chem.docs, "https://docs.pathsim.org/chem");
        assert_eq!(
            chem.pypi.as_deref(),
            Some("https://pypi.org/project/pathsim-chem")
        );
        assert!(package("nonexistent").is_none());
    }

    #[test]
    fn pathview_is_an_app_not_a_library() {
        let pathview = package("pathview").unwrap();
        assert_eq!(pathview.app.as_deref(), Some("https://view.pathsim.org"));
        assert!(pathview.pypi.is_none());
        assert!(pathview.api.is_none());
    }

    #[test]
    fn all_registry_urls_parse() {
        for p in packages() {
            for candidate in [Some(&p.docs), p.api.as_ref(), p.examples.as_ref(), p.pypi.as_ref(), Some(&p.github), p.app.as_ref()]
                .into_iter()
                .flatten()
            {
                let parsed = url::Url::parse(candidate)
                    .unwrap_or_else(|e| panic!("{}: bad url {candidate}: {e}", p.id));
                assert_eq!(parsed.scheme(), "https", "{candidate}");
            }
        }
    }

    #[test]
    fn marketing_copy_present() {
        assert_eq!(FEATURES.len(), 8);
        assert_eq!(INSTALLATION[0].command, "pip install pathsim");
        assert!(HERO.tagline.contains("System modeling"));
        assert!(EXAMPLE_CODE.contains("Simulation"));
    }

    #[test]
    fn nav_and_footer_derive_from_external_hosts() {
        assert_eq!(
            nav().get_started,
            "https://docs.pathsim.org/pathsim/getting-started"
        );
        assert_eq!(nav().try_online, external::VIEW);
        assert_eq!(footer().pypi, "https://pypi.org/project/pathsim");
    }
}
