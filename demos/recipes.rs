//! Walks through the builder, strategy, event ordering and person listing recipes.
//!
//! Run with: cargo run --example recipes

use cookbook::event::Event;
use cookbook::person::{StaticPersonRepository, render_persons};
use cookbook::sound::{Animal, Sound};
use cookbook::style::{heading, ndim};
use cookbook::vehicle::{Terrain, VehicleBuilder};
use std::time::Duration;
use strum::IntoEnumIterator;

fn main() -> cookbook::Result<()> {
    cookbook::logger::init_logging();

    println!("{}", heading("Builder"));
    let car = VehicleBuilder::new()
        .wheels(4)
        .engine("electric")
        .doors(4)
        .drives_on(Terrain::Land)
        .build()?;
    let bike = VehicleBuilder::new().wheels(2).drives_on(Terrain::Land).build()?;
    println!("car:  {car:?}");
    println!("bike: {bike:?}");
    if let Err(err) = VehicleBuilder::new().drives_on(Terrain::Land).build() {
        println!("{}", ndim(err));
    }

    println!();
    println!("{}", heading("Strategy"));
    for sound in Sound::iter() {
        let animal = Animal::from_boxed(sound.strategy());
        println!("{sound}: {}", animal.make_sound());
    }

    println!();
    println!("{}", heading("Ordered events"));
    let now = Event::now("now", "demo started");
    let mut events = vec![
        Event::new(now.timestamp + Duration::from_secs(5), "later", "five seconds on"),
        Event::new(now.timestamp - Duration::from_secs(5), "earlier", "five seconds back"),
        now,
    ];
    events.sort();
    for event in &events {
        println!("{}: {}", event.name, event.message);
    }

    println!();
    println!("{}", heading("Person listing"));
    println!("{}", render_persons(&StaticPersonRepository)?);
    Ok(())
}
