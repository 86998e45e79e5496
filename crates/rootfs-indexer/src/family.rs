//! Parametric generation of release-family distro entries.
//!
//! Families of near-identical entries (successive Ubuntu or Debian
//! releases) differ only in version, codename, and architecture list, so
//! they are derived from a small [`ReleaseSpec`] instead of being spelled
//! out literally. Generation is pure and deterministic: identical specs
//! always produce identical entries, and no I/O happens here.

use rootfs_schema::{Distro, Url};

/// Inputs for one generated release entry of a distro family.
#[derive(Debug, Clone)]
pub struct ReleaseSpec {
    /// Distro family the release belongs to (e.g. "debian" for Ubuntu too).
    pub family: &'static str,
    /// Base distro name, lowercase (e.g. "ubuntu").
    pub base: &'static str,
    /// Release version (e.g. "24.04").
    pub version: &'static str,
    /// Release codename (e.g. "noble").
    pub codename: &'static str,
    /// Release tag distinguishing build flavors (e.g. "vanilla").
    pub release_tag: &'static str,
    /// Architectures to generate URLs for, in declared order.
    pub architectures: &'static [&'static str],
    /// Extra aliases appended after the derived ones.
    pub extra_aliases: &'static [&'static str],
    /// Whether this release also claims the bare base name as an alias.
    pub latest: bool,
}

/// Derive a full [`Distro`] entry from a release spec.
///
/// - id: `{base}-{version}-{release_tag}`
/// - aliases, in fixed order: `{base}-{version}`; `{base}-{major}` when the
///   version is dotted; the bare `{base}` when `latest`; then any extras.
///   Duplicates are permitted and preserved.
pub fn release_distro(spec: &ReleaseSpec) -> Distro {
    let id = format!("{}-{}-{}", spec.base, spec.version, spec.release_tag);
    let name = format!(
        "{} {} {}",
        title_case(spec.base),
        spec.version,
        spec.release_tag
    );
    let description = format!(
        "{} {} ({}) {} root filesystem",
        title_case(spec.base),
        spec.version,
        spec.codename,
        spec.release_tag
    );

    let urls = spec
        .architectures
        .iter()
        .map(|arch| Url::new(*arch, rootfs_url(spec, arch)))
        .collect();

    let mut aliases = vec![format!("{}-{}", spec.base, spec.version)];
    if let Some((major, _)) = spec.version.split_once('.') {
        aliases.push(format!("{}-{}", spec.base, major));
    }
    if spec.latest {
        aliases.push(spec.base.to_string());
    }
    aliases.extend(spec.extra_aliases.iter().map(ToString::to_string));

    Distro {
        id,
        name,
        description,
        urls,
        aliases,
    }
}

/// Build the download URL for one architecture of a release.
///
/// Fixed template over family, release tag, base distro, codename, and
/// architecture; the version is carried indirectly through the codename.
fn rootfs_url(spec: &ReleaseSpec, arch: &str) -> String {
    format!(
        "https://images.rootfs.zone/{}/{}/{}/{}-{}-{}.tar.gz",
        spec.family, spec.release_tag, spec.codename, spec.base, spec.codename, arch
    )
}

/// Uppercase the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
