use anyhow::Context;

use crate::{
    entities::project::{Project, ProjectLinks, ProjectStatus},
    repositories::in_memory::InMemoryProjectRepo,
};

/// Builds the catalog store from the projects compiled into the binary.
pub fn build_catalog() -> anyhow::Result<InMemoryProjectRepo> {
    InMemoryProjectRepo::new(seed_projects()).context("Failed to build project catalog")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "republic-of-gaming".into(),
            title: "Republic of Gaming".into(),
            description: "A community-driven project built by for me for people to meet online.".into(),
            full_description: "Republic of Gaming is an online community for people to meet and share \
                experiences. We formed out of the game Garry's Mod, based out of DarkRP re-skin called \
                1942RP. Providing an experience is Resistance Occupied Poland, we created a unique \
                experience providing a fun and engaging environment for players to immerse themselves \
                in. With a focus on roleplay, we offer a variety of jobs, events, and activities to keep \
                our community engaged and entertained."
                .into(),
            technologies: strings(&["Lua", "PHP", "JavaScript", "Hammer", "Source Engine"]),
            category: "Game Development".into(),
            status: ProjectStatus::Completed,
            images: strings(&[
                "/img/projects/rog/site.png",
                "/img/projects/rog/2.jpg",
                "/img/projects/rog/3.png",
                "/img/projects/rog/4.png",
                "/img/projects/rog/5.png",
                "/img/projects/rog/gmod.webp",
            ]),
            thumbnail_image: "/img/projects/rog/site.png".into(),
            links: ProjectLinks {
                github: Some("https://github.com/xdkaine".into()),
                live: Some("https://republicofgaming.xyz".into()),
                discord: Some("https://discord.gg/D3XKxRtpHs".into()),
                ..ProjectLinks::default()
            },
            features: strings(&[
                "Dynamic RP Experience with custom jobs and events",
                "Unique Weapons and Content constantly",
                "Maps created to feature rich detail and immersion",
                "Built with community feedback and involvement",
            ]),
            challenges: strings(&[
                "Implementing proper CI/CD for Game Server Updates",
                "Transiutioning Production Servers between Hosts",
                "Developing new mechanics and systems from scratch",
                "Building an active project as a solo developer*",
            ]),
            date_created: "2017-7-05".into(),
            date_updated: "2025-04-03".into(),
        },
        Project {
            id: "sam".into(),
            title: "SAM - Server Administration Tool".into(),
            description: "A Garry's Mod Addon for Server Administration.".into(),
            full_description: "SAM is a powerful server administration tool for Garry's Mod, designed to \
                help server owners manage their communities effectively. Built for Republic of Gaming, \
                the website for this tool includes a Ban List, Leaderboard for its users and a Community \
                List to honor its donoators and supporters of the community. Other pages include are our \
                shops and rules for our community."
                .into(),
            technologies: strings(&["Lua", "PHP", "MySQL"]),
            category: "Game Development".into(),
            status: ProjectStatus::Completed,
            images: (1..=12).map(|n| format!("/img/projects/sam/{n}.png")).collect(),
            thumbnail_image: "/img/projects/sam/1.png".into(),
            links: ProjectLinks {
                github: Some("https://github.com/xdkaine".into()),
                live: Some("https://sam.republicofgaming.xyz/v2".into()),
                ..ProjectLinks::default()
            },
            features: strings(&[
                "Real-time player banning and unbanning",
                "Gamemode/Server Statistics and Analytics",
                "Steam SSO Authentication",
                "Detailed Logs and Audit Trails",
                "Live Server Reports reported straight to Web Panel",
            ]),
            challenges: strings(&[
                "Implementing real-time statistics tracking by querying database",
                "Secure authentication through Admin Pages via Steam SSO",
                "Web Panel actions being reflected in-game",
                "Design choices to make website user-friendly",
            ]),
            date_created: "2023-11-11".into(),
            date_updated: "2025-3-22".into(),
        },
        Project {
            id: "btchat".into(),
            title: "BTChat - Bluetooth Communication App".into(),
            description: "BTChat is a peer-to-peer communication app .".into(),
            full_description: "BTChat is a peer-to-peer communication app that uses Bluetooth Low Energy \
                and Multipeer Connectivity for messaging between nearby devices without requiring \
                internet or cellular connectivity."
                .into(),
            technologies: strings(&["Swift", "SwiftUI", "CoreBluetooth"]),
            category: "App Development".into(),
            // Authored with a capitalised value; shown verbatim rather than as "In Progress".
            status: ProjectStatus::from("In-Progress"),
            images: strings(&["/img/projects/sam/1.png"]),
            thumbnail_image: "/img/projects/sam/1.png".into(),
            links: ProjectLinks {
                github: Some("https://github.com/xdkaine".into()),
                live: Some("https://sam.republicofgaming.xyz/v2".into()),
                ..ProjectLinks::default()
            },
            features: strings(&[
                "Real-time player banning and unbanning",
                "Gamemode/Server Statistics and Analytics",
                "Steam SSO Authentication",
                "Detailed Logs and Audit Trails",
                "Live Server Reports reported straight to Web Panel",
            ]),
            challenges: strings(&[
                "Implementing real-time statistics tracking by querying database",
                "Secure authentication through Admin Pages via Steam SSO",
                "Web Panel actions being reflected in-game",
                "Design choices to make website user-friendly",
            ]),
            date_created: "2023-11-11".into(),
            date_updated: "2025-3-22".into(),
        },
    ]
}
