// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisting navigation state.
//!
//! Saves a navigator to its JSON record, restores it, and shows that a record
//! naming an unknown destination fails the whole restore.
//!
//! Run:
//! - `cargo run -p waymark_demos --example persist_restore`

use waymark_nav::{Destination, NavConfig, Navigator, PersistError, Registry};

fn main() -> Result<(), PersistError> {
    env_logger::init();

    let mut nav = Navigator::new(Destination::Home, Registry::app(), NavConfig::default());
    nav.open(Destination::HomeDetail(482913));
    nav.switch_section(Destination::Profile);
    nav.open(Destination::ProfileDetail(7));

    let json = nav.save()?;
    println!("== Saved ==\n{json}");

    let restored = Navigator::restore(&json, Registry::app(), NavConfig::default())?;
    println!("== Restored ==\n{:?}", restored.visible_stack());
    assert_eq!(restored.visible_stack(), nav.visible_stack());

    let stale = json.replace("ProfileDetail:7", "Settings:7");
    match Navigator::restore(&stale, Registry::app(), NavConfig::default()) {
        Ok(_) => println!("unexpectedly restored a record with an unknown destination"),
        Err(e) => println!("== Unknown destination ==\n{e}"),
    }
    Ok(())
}
