//! `portal registry` — inspect the content registry.

use crate::registry::{self, external};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct ExternalLinks {
    docs: &'static str,
    view: &'static str,
    github: &'static str,
    pypi: &'static str,
    sponsor: &'static str,
}

/// Full registry dump, the shape consumed by page-rendering code.
#[derive(Serialize)]
struct RegistryDump {
    external: ExternalLinks,
    packages: &'static [registry::Package],
    nav: &'static registry::NavLinks,
    footer: &'static registry::FooterLinks,
    hero: registry::Hero,
    installation: [registry::InstallCommand; 2],
    features: [registry::Feature; 8],
}

fn dump() -> RegistryDump {
    RegistryDump {
        external: ExternalLinks {
            docs: external::DOCS,
            view: external::VIEW,
            github: external::GITHUB,
            pypi: external::PYPI,
            sponsor: external::SPONSOR,
        },
        packages: registry::packages(),
        nav: registry::nav(),
        footer: registry::footer(),
        hero: registry::HERO,
        installation: registry::INSTALLATION,
        features: registry::FEATURES,
    }
}

/// Print the registry, as JSON or a human listing.
pub fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&dump())?);
        return Ok(());
    }

    println!("PathSim ecosystem packages");
    println!("==========================");
    for p in registry::packages() {
        println!();
        println!("{} ({})", p.name, p.id);
        println!("  docs:   {}", p.docs);
        if let Some(api) = &p.api {
            println!("  api:    {api}");
        }
        if let Some(examples) = &p.examples {
            println!("  examples: {examples}");
        }
        if let Some(pypi) = &p.pypi {
            println!("  pypi:   {pypi}");
        }
        println!("  github: {}", p.github);
        if let Some(app) = &p.app {
            println!("  app:    {app}");
        }
    }

    println!();
    println!("Install: {}", registry::INSTALLATION[0].command);
    println!("Sponsor: {}", external::SPONSOR);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_include;
    use serde_json::json;

    #[test]
    fn dump_has_the_shape_pages_expect() {
        let value = serde_json::to_value(dump()).unwrap();
        assert_json_include!(
            actual: value,
            expected: json!({
                "external": { "docs": "https://docs.pathsim.org" },
                "packages": [
                    { "id": "pathview", "app": "https://view.pathsim.org" },
                    { "id": "pathsim", "pypi": "https://pypi.org/project/pathsim" },
                    { "id": "chem" },
                    { "id": "vehicle" }
                ],
                "hero": { "tagline": "Python native System modeling" },
                "installation": [ { "name": "pip" }, { "name": "conda" } ]
            })
        );
    }
}
