// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator basics.
//!
//! Opens screens, switches between the two bottom-bar sections, and closes
//! back to the root, printing the visible stack after each step.
//!
//! Run:
//! - `cargo run -p waymark_demos --example navigate_basics`
//! - `RUST_LOG=debug cargo run -p waymark_demos --example navigate_basics`

use waymark_nav::{Destination, NavConfig, Navigator, Registry, TOP_LEVEL};

fn show(step: &str, nav: &Navigator) {
    let stack: Vec<String> = nav.visible_stack().iter().map(ToString::to_string).collect();
    println!(
        "{step:<28} selected={:<8} stack=[{}]",
        nav.current_selection().to_string(),
        stack.join(", ")
    );
}

fn main() {
    env_logger::init();

    let mut nav = Navigator::for_session(Some(true), Registry::app(), NavConfig::default());
    nav.subscribe(|e| log::info!("revision {} ({:?})", e.revision, e.direction));

    println!("== Bottom bar: {:?} ==", TOP_LEVEL);
    show("start", &nav);

    nav.open(Destination::HomeDetail(482913));
    show("open HomeDetail", &nav);

    nav.switch_section(Destination::Profile);
    show("switch to Profile", &nav);

    nav.open(Destination::ProfileDetail(7));
    show("open ProfileDetail", &nav);

    nav.switch_section(Destination::Home);
    show("switch to Home", &nav);

    nav.switch_section(Destination::Profile);
    show("back to Profile", &nav);

    while nav.close().changed() {
        show("close", &nav);
    }
    show("at root", &nav);
}
