//! Terminal rendering of summaries and reports.

use console::style;

use champion_core::{
    AttackOutcome, AttackReport, ChampionEvent, ChampionSummary, GameConfig, StatKey,
};

pub fn print_summary(summary: &ChampionSummary) {
    println!(
        "{} {}",
        style(&summary.name).cyan().bold(),
        style(format!(
            "({} {} {})",
            summary.race, summary.gender, summary.archetype
        ))
        .dim()
    );
    println!(
        "  Level {}/{}  exp {}/{}  total {}  stat points {}",
        summary.level,
        GameConfig::MAX_LEVEL,
        summary.current_exp,
        summary.exp_needed,
        summary.total_exp,
        summary.stat_points
    );

    for key in StatKey::ALL {
        let value = summary.stats.get(key);
        let value = if value == 0 {
            style(value.to_string()).red()
        } else {
            style(value.to_string()).green()
        };
        println!("  {:<8} {}", key.to_string(), value);
    }

    let equipment = &summary.equipment;
    let armor: Vec<String> = equipment.armor().iter().map(ToString::to_string).collect();
    println!(
        "  {} {}  {}  armor: {}",
        style("Gear:").dim(),
        equipment.weapon(),
        equipment.defense_mode(),
        if armor.is_empty() {
            "none".to_string()
        } else {
            armor.join(", ")
        }
    );
}

pub fn print_attack(attacker: &str, defender: &str, report: &AttackReport) {
    let damage = &report.damage;
    println!(
        "{} attacks {} with {} ({} damage)",
        style(attacker).cyan().bold(),
        style(defender).cyan().bold(),
        report.source,
        damage.pool
    );
    println!(
        "  defense -{}  health -{}{}",
        damage.defense_lost,
        damage.health_lost,
        if damage.wasted > 0 {
            format!("  ({} wasted)", damage.wasted)
        } else {
            String::new()
        }
    );

    match &report.outcome {
        AttackOutcome::Survived => {
            println!("  {} survives", defender);
        }
        AttackOutcome::Defeated { .. } => {
            println!(
                "  {} {}",
                style("✗").red().bold(),
                style(format!("{defender} has died")).red()
            );
        }
    }

    print_events(defender, &report.defender_events());
    print_events(attacker, &report.attacker_events());
}

pub fn print_events(champion: &str, events: &[ChampionEvent]) {
    for event in events {
        println!("  {} {}: {}", style("•").dim(), champion, event.message());
    }
}
