use tessera_ui::{Dp, Modifier, remember, tessera};
use tracing::info;

use tessera_calendar::{
    calendar_date::{CalendarDate, CalendarMode},
    calendar_header::{CalendarHeaderArgs, calendar_header},
    calendar_locale::CalendarLocale,
    calendar_range::CalendarRange,
};
use tessera_components::{
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, surface},
    text::{TextArgs, text},
    theme::{MaterialTheme, material_theme},
};

struct HeaderDemoState {
    value: CalendarDate,
    mode: CalendarMode,
}

#[tessera]
pub fn app() {
    material_theme(MaterialTheme::default, || {
        surface(&SurfaceArgs::with_child(
            SurfaceArgs::default().modifier(Modifier::new().fill_max_size()),
            || {
                Modifier::new().padding_all(Dp(24.0)).run(|| {
                    header_showcase();
                });
            },
        ));
    });
}

#[tessera]
fn header_showcase() {
    let unbounded = remember(|| HeaderDemoState {
        value: CalendarDate::today(),
        mode: CalendarMode::Month,
    });
    let bounded = remember(|| HeaderDemoState {
        value: CalendarDate::new(2024, 3, 15).expect("valid demo date"),
        mode: CalendarMode::Month,
    });

    let (value, mode) = unbounded.with(|s| (s.value, s.mode));
    let (bounded_value, bounded_mode) = bounded.with(|s| (s.value, s.mode));
    let range = CalendarRange::new(
        CalendarDate::new(2024, 1, 1).expect("valid range start"),
        CalendarDate::new(2024, 6, 30).expect("valid range end"),
    );

    column(ColumnArgs::default(), move |scope| {
        scope.child(|| {
            text(&TextArgs::default().text("Calendar header").size(Dp(22.0)));
        });
        scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0)))));

        scope.child(move || {
            calendar_header(
                &CalendarHeaderArgs::default()
                    .value(value)
                    .mode(mode)
                    .fullscreen(true)
                    .show_previous_next_buttons(true)
                    .show_today_button(true)
                    .on_value_change(move |next: CalendarDate| {
                        info!(
                            year = next.year(),
                            month = next.month(),
                            day = next.day(),
                            "header value selected"
                        );
                        unbounded.with_mut(|s| s.value = next);
                    })
                    .on_mode_change(move |next: CalendarMode| {
                        unbounded.with_mut(|s| s.mode = next);
                    }),
            );
        });
        scope.child(move || {
            text(&TextArgs::default().text(format_selection(value, mode)).size(Dp(14.0)));
        });

        scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(32.0)))));
        scope.child(|| {
            text(
                &TextArgs::default()
                    .text("Bounded to 2024-01-01 ..= 2024-06-30, 简体中文")
                    .size(Dp(14.0)),
            );
        });
        scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(8.0)))));

        scope.child(move || {
            calendar_header(
                &CalendarHeaderArgs::default()
                    .value(bounded_value)
                    .mode(bounded_mode)
                    .locale(CalendarLocale::simplified_chinese())
                    .valid_range(range)
                    .show_previous_next_buttons(true)
                    .on_value_change(move |next: CalendarDate| {
                        bounded.with_mut(|s| s.value = next);
                    })
                    .on_mode_change(move |next: CalendarMode| {
                        bounded.with_mut(|s| s.mode = next);
                    }),
            );
        });
        scope.child(move || {
            text(
                &TextArgs::default()
                    .text(format_selection(bounded_value, bounded_mode))
                    .size(Dp(14.0)),
            );
        });
    });
}

fn format_selection(value: CalendarDate, mode: CalendarMode) -> String {
    let mode = match mode {
        CalendarMode::Month => "month",
        CalendarMode::Year => "year",
    };
    format!(
        "Selected {:04}-{:02}-{:02} ({mode} mode)",
        value.year(),
        value.month(),
        value.day()
    )
}
