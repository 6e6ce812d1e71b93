//! Forum bulletin renderer (`[B]`, `[SIZE]`, `[spoiler]`, `[list]`, `[URL]` tags).

use std::fmt::{self, Write};

use crate::leaderboard::{Board, DepthIncidents};
use crate::model::{CharacterTimeline, QuestReport};
use crate::report::{Leaderboard, ReportModel, Summary};

use super::{RenderError, Renderer};

/// Renders the bulletin in forum markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct BbCode;

impl Renderer for BbCode {
    fn render(&self, model: &ReportModel<'_>) -> Result<String, RenderError> {
        let mut out = String::new();
        write_bulletin(&mut out, model)?;
        Ok(out)
    }
}

fn write_bulletin(out: &mut impl Write, model: &ReportModel<'_>) -> fmt::Result {
    writeln!(out, "[B][SIZE=6]{} Achievements[/SIZE][/B]", model.guild_name)?;
    writeln!(
        out,
        "Last updated on: {}.\n",
        model.updated_on.strftime("%m-%d-%Y")
    )?;
    if let Some(url) = model.hall_of_fame_url {
        writeln!(
            out,
            "[CENTER][B][URL=\"{url}\"][SIZE=6]CLICK HERE FOR THE HALL OF FAME (GOOGLE DOCS)[/SIZE][/URL][/B][/CENTER]\n"
        )?;
    }

    write_summary(out, model.dungeon_name, &model.summary)?;
    for leaderboard in &model.leaderboards {
        write_leaderboard(out, model, leaderboard)?;
    }
    write_cautionary_tales(out, model)?;

    if let Some(url) = model.contribute_url {
        writeln!(
            out,
            "\n[CENTER][B][URL=\"{url}\"][SIZE=3]CLICK HERE TO CONTRIBUTE TO THE LEADERBOARD (GOOGLE SHEETS)[/SIZE][/URL][/B][/CENTER]\n"
        )?;
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, dungeon: &str, summary: &Summary) -> fmt::Result {
    writeln!(out, "[B][SIZE=5]{dungeon} Statistics[/SIZE][/B]")?;
    writeln!(out, "[list]")?;
    writeln!(
        out,
        "[*][B][U]Total Quest Reports[/U][/B]: {}",
        summary.total_reports
    )?;
    writeln!(
        out,
        "[*][B][U]Total Adventurers[/U][/B]: {}",
        summary.total_adventurers
    )?;
    writeln!(out, "[list]")?;
    writeln!(out, "[*][B][U]Total Active[/U][/B]: {}", summary.active)?;
    writeln!(out, "[*][B][U]Retired Veterans[/U][/B]: {}", summary.retired)?;
    writeln!(
        out,
        "[*][B][U]Total Dead/MIA[/U][/B]: {}",
        summary.dead_or_missing
    )?;
    writeln!(out, "[/list]")?;
    writeln!(out, "[/list]\n")
}

fn write_leaderboard(
    out: &mut impl Write,
    model: &ReportModel<'_>,
    leaderboard: &Leaderboard<'_>,
) -> fmt::Result {
    if leaderboard.entries.is_empty() && !model.show_empty_sections {
        return Ok(());
    }

    let n = model.leaderboard_size;
    let dungeon = model.dungeon_name;
    let (title, blurb) = match leaderboard.board {
        Board::DeepestDivers => (
            "Deepest Divers",
            format!("The top {n} deepest dives in the {dungeon}."),
        ),
        Board::LivingLegends => (
            "Living Legends",
            format!("Top {n} retirees who braved the dungeon and survived to tell the tale."),
        ),
        Board::LongestLived => (
            "Longest Lived",
            format!("The top {n} survival runs in the {dungeon}."),
        ),
    };
    writeln!(out, "[B][SIZE=5]Leaderboard: {title}[/SIZE][/B]")?;
    writeln!(out, "[I][SIZE=3]{blurb}[/SIZE][/I]")?;

    for timeline in &leaderboard.entries {
        let (name, player) = (timeline.character, timeline.player);
        match leaderboard.board {
            Board::DeepestDivers => writeln!(
                out,
                "[spoiler=\"{name} ({player}) - {} meters\"]",
                timeline.max_depth
            )?,
            Board::LivingLegends => writeln!(
                out,
                "[spoiler=\"{name} ({player}) - {} meters - {} HP remaining\"]",
                timeline.max_depth,
                timeline.last_report().hp
            )?,
            Board::LongestLived => writeln!(
                out,
                "[spoiler=\"{name} ({player}) - {} Quest Reports\"]",
                timeline.len()
            )?,
        }
        let numbered = leaderboard.board == Board::LongestLived;
        write_steps(out, timeline, numbered)?;
        writeln!(out, "[/spoiler]")?;
    }
    writeln!(out)
}

fn write_steps(
    out: &mut impl Write,
    timeline: &CharacterTimeline<'_>,
    numbered: bool,
) -> fmt::Result {
    writeln!(out, "{}", if numbered { "[list=1]" } else { "[list]" })?;
    for step in timeline.reports() {
        write_step(out, step)?;
    }
    writeln!(out, "[/list]")
}

fn write_step(out: &mut impl Write, step: &QuestReport) -> fmt::Result {
    writeln!(
        out,
        "[*][B]Day {} ({} HP)[/B]: [URL={}]{} Meters[/URL] (Roll: {}) - {}",
        step.days, step.hp, step.url, step.depth, step.next_roll, step.next_context
    )
}

fn write_cautionary_tales(out: &mut impl Write, model: &ReportModel<'_>) -> fmt::Result {
    if model.cautionary_tales.is_empty() && !model.show_empty_sections {
        return Ok(());
    }

    writeln!(out, "[B][SIZE=5]Cautionary Tales[/SIZE][/B]")?;
    for incidents in &model.cautionary_tales {
        write_incidents(out, incidents)?;
    }
    Ok(())
}

fn write_incidents(out: &mut impl Write, incidents: &DepthIncidents<'_>) -> fmt::Result {
    writeln!(out, "[spoiler=\"{} Meters\"]", incidents.depth)?;
    writeln!(out, "[list]")?;
    for report in &incidents.reports {
        writeln!(
            out,
            "[*][B]{} (@{})[/B]: [URL={}]{} HP Remaining[/URL]",
            report.character, report.player, report.url, report.hp
        )?;
    }
    writeln!(out, "[/list]")?;
    writeln!(out, "[/spoiler]")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::aggregate::aggregate;
    use crate::config::Settings;
    use crate::model::testing::report;
    use crate::store::ReportStore;

    fn render(store: &ReportStore, settings: &Settings) -> String {
        let timelines = aggregate(store);
        let model = ReportModel::build(
            store,
            &timelines,
            settings,
            jiff::civil::date(2017, 3, 4),
            0,
        );
        BbCode.render(&model).unwrap()
    }

    fn sample_store() -> ReportStore {
        [
            report("Ayla", "kim", 10, 50, "", "ALIVE"),
            report("Ayla", "kim", 40, 5, "HURT", "RETIRE"),
            report("Bram", "lee", 25, 30, "", "DEATH"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn prints_title_date_and_statistics() {
        let text = render(&sample_store(), &Settings::default());

        assert!(text.starts_with(
            "[B][SIZE=6]Orbus Guild Achievements[/SIZE][/B]\nLast updated on: 03-04-2017.\n\n"
        ));
        assert!(text.contains(
            "[B][SIZE=5]Orbus Dungeon Statistics[/SIZE][/B]\n\
             [list]\n\
             [*][B][U]Total Quest Reports[/U][/B]: 3\n\
             [*][B][U]Total Adventurers[/U][/B]: 2\n\
             [list]\n\
             [*][B][U]Total Active[/U][/B]: 0\n\
             [*][B][U]Retired Veterans[/U][/B]: 1\n\
             [*][B][U]Total Dead/MIA[/U][/B]: 1\n\
             [/list]\n\
             [/list]\n\n"
        ));
    }

    #[test]
    fn prints_leaderboard_entries_with_steps() {
        let text = render(&sample_store(), &Settings::default());

        assert!(text.contains("[spoiler=\"Ayla (kim) - 40 meters\"]\n[list]\n"));
        assert!(text.contains(
            "[*][B]Day 1 (5 HP)[/B]: [URL=https://example.org/Ayla/40]40 Meters[/URL] (Roll: 12) - RETIRE\n"
        ));
        assert!(text.contains("[spoiler=\"Ayla (kim) - 40 meters - 5 HP remaining\"]"));
        assert!(text.contains("[spoiler=\"Ayla (kim) - 2 Quest Reports\"]\n[list=1]\n"));
        assert!(text.contains("[I][SIZE=3]The top 3 deepest dives in the Orbus Dungeon.[/SIZE][/I]"));
    }

    #[test]
    fn prints_cautionary_tales() {
        let text = render(&sample_store(), &Settings::default());

        assert!(text.contains(
            "[B][SIZE=5]Cautionary Tales[/SIZE][/B]\n\
             [spoiler=\"40 Meters\"]\n\
             [list]\n\
             [*][B]Ayla (@kim)[/B]: [URL=https://example.org/Ayla/40]5 HP Remaining[/URL]\n\
             [/list]\n\
             [/spoiler]\n"
        ));
    }

    #[test]
    fn sections_are_ordered() {
        let text = render(&sample_store(), &Settings::default());
        let at = |needle: &str| text.find(needle).unwrap();

        assert!(at("Statistics") < at("Leaderboard: Deepest Divers"));
        assert!(at("Leaderboard: Deepest Divers") < at("Leaderboard: Living Legends"));
        assert!(at("Leaderboard: Living Legends") < at("Leaderboard: Longest Lived"));
        assert!(at("Leaderboard: Longest Lived") < at("Cautionary Tales"));
        assert!(at("Cautionary Tales") < at("CLICK HERE TO CONTRIBUTE"));
    }

    #[test]
    fn empty_sections_keep_headers_by_default() {
        let store: ReportStore = [report("Bram", "lee", 25, 30, "", "DEATH")]
            .into_iter()
            .collect();
        let text = render(&store, &Settings::default());

        assert!(text.contains("Leaderboard: Living Legends"));
        assert!(text.contains("[B][SIZE=5]Cautionary Tales[/SIZE][/B]"));
    }

    #[test]
    fn empty_sections_can_be_suppressed() {
        let store: ReportStore = [report("Bram", "lee", 25, 30, "", "DEATH")]
            .into_iter()
            .collect();
        let settings = Settings {
            show_empty_sections: false,
            ..Settings::default()
        };
        let text = render(&store, &settings);

        assert!(!text.contains("Leaderboard: Living Legends"));
        assert!(!text.contains("Cautionary Tales"));
        assert!(text.contains("Leaderboard: Deepest Divers"));
    }

    #[test]
    fn links_are_optional() {
        let settings = Settings {
            hall_of_fame_url: None,
            contribute_url: None,
            ..Settings::default()
        };
        let text = render(&sample_store(), &settings);
        assert!(!text.contains("CLICK HERE"));
    }
}
