//! The statically declared catalog.
//!
//! Everything the index can serve is declared here, either literally or
//! through the release-family generator. The catalog is built by an
//! explicit factory so construction order and completeness are testable;
//! nothing mutates it after it is returned.

use rootfs_schema::{Addon, Catalog, Distro, Url};

use crate::family::{release_distro, ReleaseSpec};

/// Older Ubuntu releases generated parametrically; 24.04 is declared
/// literally below against the published cdimage artifact.
const UBUNTU_RELEASES: &[ReleaseSpec] = &[
    ReleaseSpec {
        family: "debian",
        base: "ubuntu",
        version: "20.04",
        codename: "focal",
        release_tag: "vanilla",
        architectures: &["amd64", "arm64"],
        extra_aliases: &[],
        latest: false,
    },
    ReleaseSpec {
        family: "debian",
        base: "ubuntu",
        version: "22.04",
        codename: "jammy",
        release_tag: "vanilla",
        architectures: &["amd64", "arm64"],
        extra_aliases: &[],
        latest: false,
    },
];

const DEBIAN_RELEASES: &[ReleaseSpec] = &[
    ReleaseSpec {
        family: "debian",
        base: "debian",
        version: "12",
        codename: "bookworm",
        release_tag: "vanilla",
        architectures: &["amd64", "arm64"],
        extra_aliases: &[],
        latest: false,
    },
    ReleaseSpec {
        family: "debian",
        base: "debian",
        version: "13",
        codename: "trixie",
        release_tag: "vanilla",
        architectures: &["amd64"],
        extra_aliases: &[],
        latest: true,
    },
];

/// Build the full catalog.
///
/// Declared order is meaningful: the index builder processes entries in
/// this order and later identifiers overwrite earlier ones on collision.
pub fn catalog() -> Catalog {
    let mut distros = Vec::new();

    for spec in UBUNTU_RELEASES {
        distros.push(release_distro(spec));
    }

    // The current LTS ships from cdimage directly; it also holds the
    // rolling "ubuntu" alias until the next release takes it over.
    distros.push(Distro {
        id: "ubuntu-24.04-vanilla".to_string(),
        name: "Ubuntu 24.04 vanilla".to_string(),
        description: "Ubuntu 24.04 base rootfs".to_string(),
        urls: vec![Url::new(
            "amd64",
            "https://cdimage.ubuntu.com/ubuntu-base/releases/24.04/release/ubuntu-base-24.04.3-base-amd64.tar.gz",
        )],
        aliases: vec![
            "ubuntu-24-vanilla".to_string(),
            "ubuntu-vanilla".to_string(),
            "ubuntu-24.04".to_string(),
            "ubuntu-24".to_string(),
            "ubuntu".to_string(),
            "ubuntu-lts".to_string(),
        ],
    });

    for spec in DEBIAN_RELEASES {
        distros.push(release_distro(spec));
    }

    distros.push(Distro {
        id: "alpine-3.22-vanilla".to_string(),
        name: "Alpine 3.22 vanilla".to_string(),
        description: "Alpine linux 3.22 mini rootfs".to_string(),
        urls: vec![Url::new(
            "amd64",
            "https://dl-cdn.alpinelinux.org/alpine/v3.22/releases/x86_64/alpine-minirootfs-3.22.2-x86_64.tar.gz",
        )],
        aliases: vec![
            "alpine-3.22".to_string(),
            "alpine-3-vanilla".to_string(),
            "alpine-vanilla".to_string(),
            "alpine".to_string(),
        ],
    });

    distros.push(Distro {
        id: "alpine-3.21-vanilla".to_string(),
        name: "Alpine 3.21 vanilla".to_string(),
        description: "Alpine linux 3.21 mini rootfs".to_string(),
        urls: vec![Url::new(
            "amd64",
            "https://dl-cdn.alpinelinux.org/alpine/v3.21/releases/x86_64/alpine-minirootfs-3.21.4-x86_64.tar.gz",
        )],
        aliases: vec!["alpine-3.21".to_string()],
    });

    let addons = vec![
        Addon {
            id: "dev-tools".to_string(),
            name: "Dev tools".to_string(),
            description: "Compilers and common build tooling overlay".to_string(),
            urls: vec![Url::new(
                "amd64",
                "https://images.rootfs.zone/addons/dev-tools/dev-tools-amd64.tar.gz",
            )],
            aliases: vec!["build-essential".to_string()],
            // Empty: compatible with every distro.
            distro_ids: vec![],
        },
        Addon {
            id: "systemd".to_string(),
            name: "Systemd".to_string(),
            description: "Systemd init overlay for Debian-family images".to_string(),
            urls: vec![Url::new(
                "amd64",
                "https://images.rootfs.zone/addons/systemd/systemd-amd64.tar.gz",
            )],
            aliases: vec![],
            distro_ids: vec![
                "ubuntu-24.04-vanilla".to_string(),
                "ubuntu-22.04-vanilla".to_string(),
                "debian-12-vanilla".to_string(),
                "debian-13-vanilla".to_string(),
            ],
        },
    ];

    Catalog { distros, addons }
}
