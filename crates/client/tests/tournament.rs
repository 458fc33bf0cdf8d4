//! Replays the bundled tournament end to end.

use std::path::PathBuf;

use arena_client::{OutputFormat, print_history, replay};
use arena_content::ContentFactory;
use arena_core::{Combatant, Outcome, Session};

#[test]
fn bundled_tournament_replays() {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data");
    let content = ContentFactory::new(data_dir);
    let catalog = content.load_enemies().unwrap();
    let scenario = content.load_scenario("tournament").unwrap();
    let mut session = Session::new(content.load_config().unwrap());

    let replay = replay(&mut session, &catalog, &scenario).unwrap();

    let outcomes: Vec<_> = replay.reports.iter().map(|r| r.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            Outcome::Victory,
            Outcome::Victory,
            Outcome::Defeat,
            Outcome::Victory,
            Outcome::Victory,
        ]
    );
    assert_eq!(replay.skipped, 0);
    assert_eq!(session.history().len(), 5);

    let survivors: Vec<_> = session
        .roster()
        .heroes()
        .map(|(_, hero)| (hero.name().to_owned(), hero.health()))
        .collect();
    assert_eq!(
        survivors,
        vec![("Conan".to_owned(), 311), ("Robin".to_owned(), 75)]
    );

    let robin = session.roster().hero_at(1).unwrap().1;
    assert_eq!(robin.arrows(), Some(4));

    let enemies: Vec<_> = session
        .roster()
        .enemies()
        .map(|(_, enemy)| enemy.name().to_owned())
        .collect();
    assert_eq!(enemies, vec!["Dragon"]);

    let mut out = Vec::new();
    print_history(&mut out, &session, &replay, OutputFormat::Text).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("#5 Battle Record:"));
}
