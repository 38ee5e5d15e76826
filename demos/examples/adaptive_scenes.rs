// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive scenes.
//!
//! Builds a few stacks and prints the scene chosen for each width class:
//! list-detail panes, two-pane pairs with placeholders, and overlays.
//!
//! Run:
//! - `cargo run -p waymark_demos --example adaptive_scenes`

use waymark_nav::{Destination, NavConfig, NavError, Navigator, Registry, Scene, WidthClass};
use waymark_scene::{DetailPane, SceneLayers};

const WIDTHS: [WidthClass; 3] = [WidthClass::Compact, WidthClass::Medium, WidthClass::Expanded];

fn describe(nav: &Navigator, scene: &Scene) -> String {
    let name = |i: usize| nav.visible_stack()[i].to_string();
    match scene {
        Scene::Overlay(o) => format!("{:?} with {}", o.presentation, name(o.index)),
        Scene::ListDetail(ld) => {
            let panes: Vec<String> = scene.rendered().into_iter().map(name).collect();
            let placeholder = if ld.detail == DetailPane::Placeholder && ld.shape.expanded_count() > 1 {
                " + placeholder"
            } else {
                ""
            };
            format!(
                "list-detail {:?} [{}]{placeholder} bar={}",
                ld.shape,
                panes.join(" | "),
                ld.bottom_bar
            )
        }
        Scene::TwoPane(tp) => match tp.second {
            Some(second) => format!("two-pane [{} | {}]", name(tp.first), name(second)),
            None => format!("two-pane [{} | placeholder]", name(tp.first)),
        },
        Scene::Single(s) => format!("single [{}]", name(s.index)),
    }
}

fn show(title: &str, nav: &Navigator) {
    println!("== {title} ==");
    for width in WIDTHS {
        let SceneLayers { base, overlays } = nav.layers(width);
        let mut line = match &base {
            Some(scene) => describe(nav, scene),
            None => "nothing".to_string(),
        };
        for o in overlays {
            line.push_str(&format!(" / {}", describe(nav, &Scene::Overlay(o))));
        }
        println!("  {:<9} {line}", format!("{width:?}"));
    }
}

fn main() -> Result<(), NavError> {
    env_logger::init();
    let mut nav = Navigator::new(Destination::Home, Registry::app(), NavConfig::default());
    show("Home", &nav);

    nav.open(Destination::HomeDetail(1));
    nav.open(Destination::HomeDetail(2));
    show("Home > two details", &nav);

    nav.open(Destination::HomeInfo);
    show("Home > detail > info", &nav);

    nav.open(Destination::Overlay);
    show("... > overlay", &nav);

    let mut profile = Navigator::new(Destination::Home, Registry::app(), NavConfig::default());
    profile.switch_section(Destination::Profile);
    profile.open(Destination::ProfileDetail(7));
    show("Profile > detail", &profile);

    profile.open(Destination::ProfileDetail(8));
    profile.close_while(|d| matches!(d, Destination::ProfileDetail(8)));
    profile.replace_section_history(vec![Destination::ProfileDetail(9)])?;
    show("Profile replaced by a lone detail", &profile);
    Ok(())
}
