//! Scenario replay against a fresh session.

use std::io::Write;

use anyhow::{Context, Result};
use arena_content::{EnemyCatalog, Scenario};
use arena_core::{ArenaError, BattleRecord, BattleReport, EnemyId, HeroId, Outcome, Session};

use crate::config::OutputFormat;

/// What a replayed scenario produced.
#[derive(Debug, Default)]
pub struct Replay {
    pub reports: Vec<BattleReport>,
    /// Battles skipped because a combatant had already been defeated.
    pub skipped: usize,
}

/// Creates every scenario combatant, then fights the scripted battles in order.
///
/// A battle whose hero or enemy already fell earlier in the scenario is
/// skipped. Any other failure aborts the replay.
pub fn replay(
    session: &mut Session,
    catalog: &EnemyCatalog,
    scenario: &Scenario,
) -> Result<Replay> {
    let mut heroes: Vec<HeroId> = Vec::with_capacity(scenario.heroes.len());
    for spec in &scenario.heroes {
        let id = if spec.is_plain() {
            session.create_hero(scenario.strategy, spec.kind.code(), &spec.name)?
        } else {
            let hero = spec
                .build()
                .with_context(|| format!("Hero '{}' is invalid", spec.name))?;
            session.add_hero(hero)
        };
        heroes.push(id);
    }

    let mut enemies: Vec<EnemyId> = Vec::with_capacity(scenario.enemies.len());
    for spec in &scenario.enemies {
        enemies.push(session.add_enemy(spec.spawn(catalog)?));
    }

    let mut replay = Replay::default();
    for battle in &scenario.battles {
        let (Some(&hero), Some(&enemy)) = (heroes.get(battle.hero), enemies.get(battle.enemy))
        else {
            anyhow::bail!(
                "Battle refers to hero {} / enemy {} outside the scenario",
                battle.hero,
                battle.enemy
            );
        };

        match session.execute_battle(hero, enemy) {
            Ok(report) => replay.reports.push(report),
            Err(ArenaError::Battle(error)) if error.is_precondition_violation() => {
                tracing::warn!(%hero, %enemy, "skipping battle: {}", error);
                replay.skipped += 1;
            }
            Err(error) => return Err(error.into()),
        }
    }

    Ok(replay)
}

/// A history record together with the result of the battle it opened.
///
/// Records taken before the replay carry no result.
#[derive(Debug, serde::Serialize)]
struct HistoryEntry<'a> {
    record: &'a BattleRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rounds: Option<u32>,
}

fn history_entries<'a>(session: &'a Session, replay: &'a Replay) -> Vec<HistoryEntry<'a>> {
    session
        .battle_records()
        .map(|record| {
            let report = replay
                .reports
                .iter()
                .find(|report| report.record == record.sequence());
            HistoryEntry {
                record,
                outcome: report.map(|report| report.outcome),
                rounds: report.map(|report| report.rounds),
            }
        })
        .collect()
}

/// Writes the battle history in the requested format.
pub fn print_history(
    out: &mut impl Write,
    session: &Session,
    replay: &Replay,
    format: OutputFormat,
) -> Result<()> {
    let entries = history_entries(session, replay);
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "========= Battle History =========")?;
            if entries.is_empty() {
                writeln!(out, "No battles have been fought.")?;
            }
            for entry in &entries {
                writeln!(out, "#{} {}", entry.record.sequence() + 1, entry.record)?;
                if let (Some(outcome), Some(rounds)) = (entry.outcome, entry.rounds) {
                    writeln!(out, "Result: {} after {} rounds", outcome, rounds)?;
                }
            }
            if replay.skipped > 0 {
                writeln!(out, "{} battle(s) skipped.", replay.skipped)?;
            }
            write!(out, "{}", session.roster())?;
        }
    }
    Ok(())
}
