//! Trained-unit proportions per player.
//!
//! Labels are colored by global discovery order: roster order first, then
//! each player's first-appearance order. A label keeps the same color in
//! every player's chart.

use std::collections::BTreeMap;

use replay_types::PlayerProduction;

use crate::bucket::{BucketedLog, Occurrence};
use crate::palette::ColorResolver;

/// Label counts in first-appearance order.
fn count_labels<'a>(units: &[Occurrence<'a>]) -> Vec<(&'a str, u32)> {
    let mut order: Vec<(&'a str, u32)> = Vec::new();
    let mut index: BTreeMap<&'a str, usize> = BTreeMap::new();

    for occurrence in units {
        match index.get(occurrence.action).copied() {
            Some(i) => {
                if let Some(slot) = order.get_mut(i) {
                    slot.1 = slot.1.saturating_add(1);
                }
            }
            None => {
                index.insert(occurrence.action, order.len());
                order.push((occurrence.action, 1));
            }
        }
    }
    order
}

/// Tally every rostered player's Units bucket.
///
/// A player with no trainings gets empty parallel lists.
pub fn tally_production<R>(log: &BucketedLog<'_>, resolver: &R) -> Vec<PlayerProduction>
where
    R: ColorResolver + ?Sized,
{
    let mut color_of: BTreeMap<&str, String> = BTreeMap::new();

    log.players()
        .iter()
        .map(|buckets| {
            let counted = count_labels(&buckets.units);
            let mut production = PlayerProduction {
                player: buckets.name().to_owned(),
                labels: Vec::with_capacity(counted.len()),
                counts: Vec::with_capacity(counted.len()),
                colors: Vec::with_capacity(counted.len()),
            };
            for (label, count) in counted {
                let next = color_of.len();
                let color = color_of
                    .entry(label)
                    .or_insert_with(|| resolver.nth(next).to_owned());
                production.colors.push(color.clone());
                production.labels.push(label.to_owned());
                production.counts.push(count);
            }
            production
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::bucket_events;
    use crate::palette::{FALLBACK_HEX, NamedPalette, PaletteEntry};
    use replay_types::{Event, Player};

    fn two_color_palette() -> NamedPalette {
        NamedPalette {
            version: "test".to_owned(),
            colors: vec![
                PaletteEntry {
                    name: "One".to_owned(),
                    hex: "#111111".to_owned(),
                },
                PaletteEntry {
                    name: "Two".to_owned(),
                    hex: "#222222".to_owned(),
                },
            ],
        }
    }

    #[test]
    fn counts_in_first_appearance_order() {
        let players = vec![Player::named("A")];
        let events = vec![
            Event::new("0:01", "A", "SCV", "Train"),
            Event::new("0:02", "A", "Marine", "Train"),
            Event::new("0:03", "A", "SCV", "Train"),
            Event::new("0:04", "A", "Barracks", "Build"),
        ];
        let log = bucket_events(&players, &events);
        let tally = tally_production(&log, &NamedPalette::builtin());

        let a = tally.first();
        assert_eq!(
            a.map(|p| p.labels.clone()),
            Some(vec!["SCV".to_owned(), "Marine".to_owned()])
        );
        assert_eq!(a.map(|p| p.counts.clone()), Some(vec![2, 1]));
    }

    #[test]
    fn colors_are_shared_across_players() {
        let players = vec![Player::named("A"), Player::named("B")];
        let events = vec![
            Event::new("0:01", "B", "Zergling", "Train"),
            Event::new("0:02", "A", "SCV", "Train"),
            Event::new("0:03", "B", "SCV", "Train"),
        ];
        let log = bucket_events(&players, &events);
        let tally = tally_production(&log, &two_color_palette());

        // Discovery runs in roster order, so A's SCV takes the first color.
        let a = tally.first();
        let b = tally.get(1);
        assert_eq!(
            a.map(|p| p.colors.clone()),
            Some(vec!["#111111".to_owned()])
        );
        assert_eq!(
            b.map(|p| p.colors.clone()),
            Some(vec!["#222222".to_owned(), "#111111".to_owned()])
        );
    }

    #[test]
    fn palette_cycles_when_labels_outnumber_colors() {
        let players = vec![Player::named("A")];
        let events = vec![
            Event::new("0:01", "A", "SCV", "Train"),
            Event::new("0:02", "A", "Marine", "Train"),
            Event::new("0:03", "A", "Medic", "Train"),
        ];
        let log = bucket_events(&players, &events);
        let tally = tally_production(&log, &two_color_palette());
        assert_eq!(
            tally.first().map(|p| p.colors.clone()),
            Some(vec![
                "#111111".to_owned(),
                "#222222".to_owned(),
                "#111111".to_owned(),
            ])
        );
    }

    #[test]
    fn no_trainings_gives_empty_lists() {
        let players = vec![Player::named("A")];
        let events = vec![Event::new("0:04", "A", "Barracks", "Build")];
        let log = bucket_events(&players, &events);
        let tally = tally_production(&log, &NamedPalette::builtin());
        assert_eq!(tally.len(), 1);
        assert!(tally.iter().all(PlayerProduction::is_empty));
    }

    #[test]
    fn empty_palette_uses_fallback() {
        let players = vec![Player::named("A")];
        let events = vec![Event::new("0:01", "A", "SCV", "Train")];
        let log = bucket_events(&players, &events);
        let empty = NamedPalette {
            version: "empty".to_owned(),
            colors: Vec::new(),
        };
        let tally = tally_production(&log, &empty);
        assert_eq!(
            tally.first().map(|p| p.colors.clone()),
            Some(vec![FALLBACK_HEX.to_owned()])
        );
    }
}
