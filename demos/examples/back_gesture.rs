// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predictive back.
//!
//! Compares the back plans of each policy, then drives one cancelled and one
//! completed back gesture.
//!
//! Run:
//! - `cargo run -p waymark_demos --example back_gesture`

use std::error::Error;

use waymark_nav::{BackPolicy, Destination, NavConfig, Navigator, Registry, WidthClass};

const POLICIES: [BackPolicy; 4] = [
    BackPolicy::PopLatest,
    BackPolicy::PopUntilSceneValueChange,
    BackPolicy::PopUntilCurrentDestinationChange,
    BackPolicy::PopUntilContentChange,
];

fn navigator(policy: BackPolicy) -> Result<Navigator, Box<dyn Error>> {
    let config = NavConfig::builder().back_policy(policy).build()?;
    let mut nav = Navigator::new(Destination::Home, Registry::app(), config);
    nav.open(Destination::HomeDetail(1));
    nav.open(Destination::HomeDetail(2));
    nav.open(Destination::HomeInfo);
    Ok(nav)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("== Plans for [Home, HomeDetail:1, HomeDetail:2, HomeInfo] ==");
    for policy in POLICIES {
        let nav = navigator(policy)?;
        for width in [WidthClass::Compact, WidthClass::Expanded] {
            let plan = nav.back_plan(width)?;
            println!(
                "  {:<34} {:<9} pop={} previous={:?}",
                format!("{policy:?}"),
                format!("{width:?}"),
                plan.pop_count,
                plan.previous_shape
            );
        }
    }

    let mut nav = navigator(BackPolicy::PopUntilCurrentDestinationChange)?;
    println!("== Cancelled gesture ==");
    nav.begin_back_gesture(WidthClass::Expanded)?;
    for p in [0.1, 0.35, 0.6] {
        let seek = nav.update_back_gesture(p)?;
        println!("  progress {:.2} -> {:?}", seek.fraction, seek.target);
    }
    nav.cancel_back_gesture()?;
    println!("  stack: {:?}", nav.visible_stack());

    println!("== Completed gesture ==");
    nav.begin_back_gesture(WidthClass::Expanded)?;
    nav.update_back_gesture(1.0)?;
    let popped = nav.complete_back_gesture()?;
    println!("  popped {popped}, stack: {:?}", nav.visible_stack());
    Ok(())
}
