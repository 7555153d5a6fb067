//! Headless demo: loads a style sheet, composes it for each platform
//! generation, paints every interaction state and schedules a demo alarm.
//!
//! Run with `RUST_LOG=debug` to see compositor and scheduler traces.

use anyhow::{Context, Result};
use chrono::Local;

use swatch_engine::logging::{init_logging, LoggingConfig};
use swatch_engine::platform::PlatformVersion;
use swatch_engine::scene::DrawCmd;
use swatch_engine::time::{self, AlarmService, PendingAlarm, TIME_FORMAT};
use swatch_ui::prelude::*;

const BUTTON_STYLE: &str = include_str!("../assets/button.style");

const VIEWPORT: Vec2 = Vec2::new(200.0, 100.0);

/// `name: value` lines; `#` at the start of a line comments it out.
fn parse_style_sheet(src: &str) -> Vec<(&str, &str)> {
    src.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter_map(|l| l.split_once(':'))
        .map(|(name, value)| (name.trim(), value.trim()))
        .collect()
}

fn describe(cmd: &DrawCmd) -> &'static str {
    match cmd {
        DrawCmd::RoundedRect(_) => "rounded-rect",
        DrawCmd::Ellipse(_) => "ellipse",
        DrawCmd::Ring(_) => "ring",
        DrawCmd::Line(_) => "line",
        DrawCmd::Polygon(_) => "polygon",
    }
}

fn paint_states(ui: &mut UiScene, button: &mut ColorfulButton) {
    let away = UiInput { mouse_pos: Vec2::new(-1.0, -1.0), ..Default::default() };
    let held = UiInput { mouse_pos: Vec2::new(20.0, 20.0), mouse_pressed: true, mouse_clicked: false };

    let cases = [
        ("normal", InteractionState::ENABLED, &away),
        ("focused", InteractionState::ENABLED | InteractionState::FOCUSED, &away),
        ("pressed", InteractionState::ENABLED, &held),
        ("disabled", InteractionState::empty(), &held),
    ];

    for (name, state, input) in cases {
        button.set_interaction_state(state);
        let list = ui.frame(button, VIEWPORT, input);
        let cmds: Vec<_> = list.iter_in_paint_order().map(|item| describe(&item.cmd)).collect();
        log::info!("  {name:<8} -> {}", cmds.join(" + "));
    }
}

/// Alarm backend that only reports what it was asked to do.
struct LoggingAlarmService;

impl AlarmService for LoggingAlarmService {
    fn set_exact_and_allow_while_idle(&mut self, trigger_at_ms: i64, alarm: &PendingAlarm) {
        log::info!("exact+idle alarm #{} -> {} at {trigger_at_ms}", alarm.request_id, alarm.target);
    }

    fn set_exact(&mut self, trigger_at_ms: i64, alarm: &PendingAlarm) {
        log::info!("exact alarm #{} -> {} at {trigger_at_ms}", alarm.request_id, alarm.target);
    }

    fn set_repeating(&mut self, trigger_at_ms: i64, interval_ms: i64, alarm: &PendingAlarm) {
        log::info!(
            "repeating alarm #{} -> {} at {trigger_at_ms} every {interval_ms} ms",
            alarm.request_id,
            alarm.target
        );
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let style = StyleConfiguration::from_attributes(parse_style_sheet(BUTTON_STYLE))
        .context("loading button style sheet")?;
    log::info!(
        "style: {:?} {} -> {} ({:?})",
        style.shape(),
        style.start_color(),
        style.end_color(),
        style.gradient_orientation()
    );

    let mut ui = UiScene::new();
    let mut button = ColorfulButton::with_style(style, CapabilityLevel::Low)
        .on_click(|| log::info!("button clicked"));

    for version in [PlatformVersion(15), PlatformVersion::STATE_LIST, PlatformVersion::RIPPLE] {
        let capability = version.background_capability();
        button.set_capability(capability);
        log::info!(
            "platform {} ({capability}): {:?}",
            version.0,
            button.background().strategy()
        );
        paint_states(&mut ui, &mut button);
    }

    // Pressed and focused fills follow their own colors once unlocked.
    button
        .restyle(|s| s.with_lock_press_color(false))
        .context("unlocking press color")?;
    log::info!("unlocked press color");
    paint_states(&mut ui, &mut button);

    let mut bar = ContrastBar::new();
    bar.set_progress(0.62);
    let parts = ui.frame(&mut bar, Vec2::new(400.0, 40.0), &UiInput::default()).len();
    log::info!("contrast bar at {:.0}%: {parts} shapes", bar.progress() * 100.0);

    let when = (Local::now() + chrono::Duration::hours(1)).format(TIME_FORMAT).to_string();
    for version in [PlatformVersion(18), PlatformVersion::EXACT_ALARM, PlatformVersion::EXACT_WHILE_IDLE] {
        let strategy = time::schedule(
            &mut LoggingAlarmService,
            version.alarm_capability(),
            7,
            &when,
            "swatch.reminder",
            24 * 60 * 60 * 1000,
        )
        .with_context(|| format!("scheduling demo alarm for {when}"))?;
        log::info!("platform {}: {strategy:?}", version.0);
    }

    Ok(())
}
