//! The calendar header bar: year/month selectors, navigation, and a mode
//! switch.
//!
//! ## Usage
//!
//! Place above a calendar body; the header owns no date state and reports
//! every derived value through its callbacks.
use derive_setters::Setters;
use tessera_ui::{CallbackWith, Color, Dp, Modifier, tessera, use_context};
use tracing::debug;

use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    modifier::{ModifierExt as _, SemanticsArgs},
    row::{RowArgs, row},
    shape_def::{RoundedCorner, Shape},
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::MaterialTheme,
};

use crate::{
    calendar_date::{CalendarDate, CalendarMode},
    calendar_locale::CalendarLocale,
    calendar_range::{CalendarRange, month_options, year_options},
    select::{SelectArgs, SelectOption, SelectSize, select},
};

const HEADER_VERTICAL_PADDING: Dp = Dp(8.0);
const CONTROL_GAP: Dp = Dp(8.0);
const NAV_GROUP_GAP: Dp = Dp(2.0);
const CONTROL_CORNER_RADIUS: Dp = Dp(4.0);
const SEGMENT_HORIZONTAL_PADDING: Dp = Dp(12.0);
const SEGMENT_BORDER_WIDTH: Dp = Dp(1.0);

/// Defaults for the calendar header.
pub struct CalendarHeaderDefaults;

impl CalendarHeaderDefaults {
    /// Years offered before the current value's year when no range is set.
    pub const YEAR_SELECT_OFFSET: i32 = 10;
    /// Total years offered by the year selector when no range is set.
    pub const YEAR_SELECT_TOTAL: i32 = 20;
    /// Prefix of the semantics test tags attached to header controls.
    pub const TEST_TAG_PREFIX: &'static str = "fullcalendar";
}

/// Configuration options for [`calendar_header`].
#[derive(Clone, PartialEq, Setters)]
pub struct CalendarHeaderArgs {
    /// Optional modifier chain applied to the header subtree.
    pub modifier: Modifier,
    /// The date the header derives its display state from.
    pub value: CalendarDate,
    /// Whether the calendar shows months or years.
    pub mode: CalendarMode,
    /// Display strings; see [`CalendarLocale`].
    pub locale: CalendarLocale,
    /// Optional inclusive bounds restricting selectable years and months.
    #[setters(strip_option)]
    pub valid_range: Option<CalendarRange>,
    /// Whether the header uses full-size controls instead of compact ones.
    pub fullscreen: bool,
    /// Whether previous/next navigation buttons are rendered.
    pub show_previous_next_buttons: bool,
    /// Whether the "today" button is rendered.
    pub show_today_button: bool,
    /// Years offered before the value's year when no range is set.
    pub year_select_offset: i32,
    /// Total years offered when no range is set.
    pub year_select_total: i32,
    /// Prefix of the semantics test tags attached to header controls.
    #[setters(into)]
    pub test_tag_prefix: String,
    /// Callback invoked with every derived candidate value.
    #[setters(skip)]
    pub on_value_change: Option<CallbackWith<CalendarDate>>,
    /// Callback invoked when the mode switch changes.
    #[setters(skip)]
    pub on_mode_change: Option<CallbackWith<CalendarMode>>,
}

impl CalendarHeaderArgs {
    /// Sets the value-change callback.
    pub fn on_value_change(
        mut self,
        on_value_change: impl Into<CallbackWith<CalendarDate>>,
    ) -> Self {
        self.on_value_change = Some(on_value_change.into());
        self
    }

    /// Sets the mode-change callback.
    pub fn on_mode_change(mut self, on_mode_change: impl Into<CallbackWith<CalendarMode>>) -> Self {
        self.on_mode_change = Some(on_mode_change.into());
        self
    }

    /// Returns the semantics test tag for one of the header's controls.
    ///
    /// The fixed suffixes are `header`, `year-select`, `month-select`,
    /// `navigation`, `navigation-previous`, `navigation-next`,
    /// `today-button`, `header-left[-fullscreen]`, and
    /// `header-right[-fullscreen]`.
    pub fn test_tag(&self, suffix: &str) -> String {
        format!("{}-{}", self.test_tag_prefix, suffix)
    }

    fn side_tag(&self, side: &str) -> String {
        if self.fullscreen {
            self.test_tag(&format!("header-{side}-fullscreen"))
        } else {
            self.test_tag(&format!("header-{side}"))
        }
    }

    fn control_height(&self) -> Dp {
        if self.fullscreen { Dp(40.0) } else { Dp(32.0) }
    }

    fn select_size(&self) -> SelectSize {
        if self.fullscreen {
            SelectSize::Default
        } else {
            SelectSize::Small
        }
    }
}

impl Default for CalendarHeaderArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new().fill_max_width(),
            value: CalendarDate::today(),
            mode: CalendarMode::default(),
            locale: CalendarLocale::default(),
            valid_range: None,
            fullscreen: false,
            show_previous_next_buttons: false,
            show_today_button: false,
            year_select_offset: CalendarHeaderDefaults::YEAR_SELECT_OFFSET,
            year_select_total: CalendarHeaderDefaults::YEAR_SELECT_TOTAL,
            test_tag_prefix: CalendarHeaderDefaults::TEST_TAG_PREFIX.to_string(),
            on_value_change: None,
            on_mode_change: None,
        }
    }
}

/// Returns the candidate value after selecting `year`.
///
/// The month is clamped into the range's month span when the new year is a
/// boundary year; the day is clamped to the target month's length.
pub fn value_for_year(value: CalendarDate, year: i32, range: Option<&CalendarRange>) -> CalendarDate {
    let next = value.with_year(year);
    match range {
        Some(range) => range.clamp_month(next),
        None => next,
    }
}

/// Returns the candidate value after selecting `month` (1-12).
///
/// No range clamping is applied; the selector only offers months that are
/// valid for the boundary year.
pub fn value_for_month(value: CalendarDate, month: u8) -> CalendarDate {
    value.with_month(month)
}

/// # calendar_header
///
/// Render the header bar of a calendar: a year selector, a month selector in
/// month mode, optional previous/next and today buttons, and a month/year
/// mode switch.
///
/// ## Usage
///
/// The header is presentational. It derives everything from `args` and
/// reports user interaction through `on_value_change` and `on_mode_change`;
/// owners decide what to do with the candidate values.
///
/// Previous/next stepping and the today button do not clamp the candidate
/// into `valid_range`; owners that need hard bounds clamp in their
/// `on_value_change`.
///
/// ## Parameters
///
/// - `args` — display state and callbacks; see [`CalendarHeaderArgs`].
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use tessera_calendar::{
///     calendar_date::{CalendarDate, CalendarMode},
///     calendar_header::{CalendarHeaderArgs, calendar_header},
/// };
/// # use tessera_components::theme::{MaterialTheme, material_theme};
///
/// # material_theme(MaterialTheme::default, || {
/// let value = CalendarDate::new(2024, 3, 15).unwrap();
/// let args = CalendarHeaderArgs::default()
///     .value(value)
///     .mode(CalendarMode::Month)
///     .show_previous_next_buttons(true)
///     .show_today_button(true)
///     .on_value_change(|next: CalendarDate| {
///         assert!(next.month() >= 1 && next.month() <= 12);
///     });
/// assert_eq!(args.test_tag("year-select"), "fullcalendar-year-select");
/// calendar_header(&args);
/// # });
/// # }
/// # component();
/// ```
#[tessera]
pub fn calendar_header(args: &CalendarHeaderArgs) {
    let args = args.clone();
    let header_tag = args.test_tag("header");
    let modifier = args
        .modifier
        .padding_symmetric(Dp(0.0), HEADER_VERTICAL_PADDING)
        .semantics(SemanticsArgs::new().test_tag(header_tag));

    row(
        RowArgs::default()
            .modifier(modifier)
            .main_axis_alignment(MainAxisAlignment::SpaceBetween)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            let left_args = args.clone();
            scope.child(move || {
                header_left(&left_args);
            });
            let right_args = args.clone();
            scope.child(move || {
                header_right(&right_args);
            });
        },
    );
}

fn header_left(args: &CalendarHeaderArgs) {
    let args = args.clone();
    let side_tag = args.side_tag("left");

    row(
        RowArgs::default()
            .modifier(Modifier::new().semantics(SemanticsArgs::new().test_tag(side_tag)))
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            if args.show_previous_next_buttons {
                let nav_args = args.clone();
                scope.child(move || {
                    navigation_buttons(&nav_args);
                });
            }
            if args.show_previous_next_buttons && args.show_today_button {
                scope.child(|| spacer(&SpacerArgs::new(Modifier::new().width(CONTROL_GAP))));
            }
            if args.show_today_button {
                let today_args = args.clone();
                scope.child(move || {
                    today_button(&today_args);
                });
            }
        },
    );
}

fn header_right(args: &CalendarHeaderArgs) {
    let args = args.clone();
    let side_tag = args.side_tag("right");

    row(
        RowArgs::default()
            .modifier(Modifier::new().semantics(SemanticsArgs::new().test_tag(side_tag)))
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            let year_args = args.clone();
            scope.child(move || {
                year_select(&year_args);
            });

            if args.mode == CalendarMode::Month {
                scope.child(|| spacer(&SpacerArgs::new(Modifier::new().width(CONTROL_GAP))));
                let month_args = args.clone();
                scope.child(move || {
                    month_select(&month_args);
                });
            }

            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().width(CONTROL_GAP))));
            let switch_args = args.clone();
            scope.child(move || {
                mode_switch(&switch_args);
            });
        },
    );
}

fn year_select(args: &CalendarHeaderArgs) {
    let locale = args.locale.clone();
    let options = year_options(
        args.value.year(),
        args.year_select_offset,
        args.year_select_total,
        args.valid_range.as_ref(),
    )
    .into_iter()
    .map(|year| SelectOption::new(year, format!("{year}{}", locale.year_suffix)))
    .collect::<Vec<_>>();

    let value = args.value;
    let range = args.valid_range;
    let on_value_change = args.on_value_change.clone();
    let select_args = SelectArgs::default()
        .options(options)
        .selected(value.year())
        .size(args.select_size())
        .test_tag(args.test_tag("year-select"))
        .accessibility_label(locale.year.clone())
        .on_select(move |year: i32| {
            emit_value(&on_value_change, value_for_year(value, year, range.as_ref()));
        });
    select(&select_args);
}

fn month_select(args: &CalendarHeaderArgs) {
    let locale = args.locale.clone();
    let value = args.value;
    let options = month_options(value.year(), args.valid_range.as_ref())
        .into_iter()
        .map(|month| {
            let label = locale.month_name(value.with_month(month).year_month());
            SelectOption::new(month as i32, label)
        })
        .collect::<Vec<_>>();

    let on_value_change = args.on_value_change.clone();
    let select_args = SelectArgs::default()
        .options(options)
        .selected(value.month() as i32)
        .size(args.select_size())
        .test_tag(args.test_tag("month-select"))
        .accessibility_label(locale.month.clone())
        .on_select(move |month: i32| {
            emit_value(&on_value_change, value_for_month(value, month as u8));
        });
    select(&select_args);
}

fn navigation_buttons(args: &CalendarHeaderArgs) {
    let value = args.value;
    let mode = args.mode;
    let on_previous = args.on_value_change.clone();
    let on_next = args.on_value_change.clone();
    let height = args.control_height();
    let group_tag = args.test_tag("navigation");
    let previous_tag = args.test_tag("navigation-previous");
    let next_tag = args.test_tag("navigation-next");

    row(
        RowArgs::default()
            .modifier(Modifier::new().semantics(SemanticsArgs::new().test_tag(group_tag)))
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            let previous_tag = previous_tag.clone();
            scope.child(move || {
                header_button(
                    "<",
                    height,
                    previous_tag.clone(),
                    segment_shape(SegmentEnd::Start),
                    move || {
                        emit_value(&on_previous, value.step(mode, -1));
                    },
                );
            });
            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().width(NAV_GROUP_GAP))));
            let next_tag = next_tag.clone();
            scope.child(move || {
                header_button(
                    ">",
                    height,
                    next_tag.clone(),
                    segment_shape(SegmentEnd::End),
                    move || {
                        emit_value(&on_next, value.step(mode, 1));
                    },
                );
            });
        },
    );
}

fn today_button(args: &CalendarHeaderArgs) {
    let on_value_change = args.on_value_change.clone();
    header_button(
        args.locale.today.clone(),
        args.control_height(),
        args.test_tag("today-button"),
        Shape::rounded_rectangle(CONTROL_CORNER_RADIUS),
        move || {
            emit_value(&on_value_change, CalendarDate::today());
        },
    );
}

fn header_button(
    label: impl Into<String>,
    height: Dp,
    test_tag: String,
    shape: Shape,
    on_click: impl Fn() + Send + Sync + 'static,
) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;
    let label = label.into();

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(
                Modifier::new()
                    .size_in(None, None, Some(height), None)
                    .semantics(SemanticsArgs::new().test_tag(test_tag)),
            )
            .style(SurfaceStyle::Outlined {
                color: scheme.outline,
                width: SEGMENT_BORDER_WIDTH,
            })
            .shape(shape)
            .content_alignment(Alignment::Center)
            .accessibility_label(label.clone())
            .on_click(on_click),
        move || {
            let label = label.clone();
            Modifier::new()
                .padding_symmetric(SEGMENT_HORIZONTAL_PADDING, Dp(0.0))
                .run(move || {
                    text(
                        &TextArgs::default()
                            .text(label.clone())
                            .size(typography.label_large.font_size)
                            .color(scheme.on_surface),
                    );
                });
        },
    ));
}

fn mode_switch(args: &CalendarHeaderArgs) {
    let mode = args.mode;
    let height = args.control_height();
    let month_label = args.locale.month.clone();
    let year_label = args.locale.year.clone();
    let on_month = args.on_mode_change.clone();
    let on_year = args.on_mode_change.clone();

    row(
        RowArgs::default().cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            let month_label = month_label.clone();
            let on_month = on_month.clone();
            scope.child(move || {
                mode_segment(
                    month_label.clone(),
                    height,
                    mode == CalendarMode::Month,
                    SegmentEnd::Start,
                    on_month.clone(),
                    CalendarMode::Month,
                );
            });
            let year_label = year_label.clone();
            let on_year = on_year.clone();
            scope.child(move || {
                mode_segment(
                    year_label.clone(),
                    height,
                    mode == CalendarMode::Year,
                    SegmentEnd::End,
                    on_year.clone(),
                    CalendarMode::Year,
                );
            });
        },
    );
}

fn mode_segment(
    label: String,
    height: Dp,
    selected: bool,
    end: SegmentEnd,
    on_mode_change: Option<CallbackWith<CalendarMode>>,
    mode: CalendarMode,
) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    let container_color = if selected {
        scheme.secondary_container
    } else {
        Color::TRANSPARENT
    };
    let label_color = if selected {
        scheme.on_secondary_container
    } else {
        scheme.on_surface
    };

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().size_in(None, None, Some(height), None))
            .style(SurfaceStyle::FilledOutlined {
                fill_color: container_color,
                border_color: scheme.outline,
                border_width: SEGMENT_BORDER_WIDTH,
            })
            .shape(segment_shape(end))
            .content_alignment(Alignment::Center)
            .accessibility_label(label.clone())
            .on_click(move || {
                if selected {
                    return;
                }
                if let Some(on_mode_change) = &on_mode_change {
                    debug!(?mode, "calendar header mode change");
                    on_mode_change.call(mode);
                }
            }),
        move || {
            let label = label.clone();
            Modifier::new()
                .padding_symmetric(SEGMENT_HORIZONTAL_PADDING, Dp(0.0))
                .run(move || {
                    text(
                        &TextArgs::default()
                            .text(label.clone())
                            .size(typography.label_large.font_size)
                            .color(label_color),
                    );
                });
        },
    ));
}

#[derive(Clone, Copy)]
enum SegmentEnd {
    Start,
    End,
}

fn segment_shape(end: SegmentEnd) -> Shape {
    match end {
        SegmentEnd::Start => Shape::RoundedRectangle {
            top_left: RoundedCorner::Capsule,
            top_right: RoundedCorner::ZERO,
            bottom_right: RoundedCorner::ZERO,
            bottom_left: RoundedCorner::Capsule,
        },
        SegmentEnd::End => Shape::RoundedRectangle {
            top_left: RoundedCorner::ZERO,
            top_right: RoundedCorner::Capsule,
            bottom_right: RoundedCorner::Capsule,
            bottom_left: RoundedCorner::ZERO,
        },
    }
}

fn emit_value(on_value_change: &Option<CallbackWith<CalendarDate>>, next: CalendarDate) {
    if let Some(on_value_change) = on_value_change {
        debug!(
            year = next.year(),
            month = next.month(),
            day = next.day(),
            "calendar header value change"
        );
        on_value_change.call(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn year_change_clamps_month_at_the_end_boundary() {
        let range = CalendarRange::new(date(2024, 1, 1), date(2026, 6, 30));
        let value = date(2025, 11, 15);
        let next = value_for_year(value, 2026, Some(&range));
        assert_eq!((next.year(), next.month()), (2026, 6));
    }

    #[test]
    fn year_change_clamps_month_at_the_start_boundary() {
        let range = CalendarRange::new(date(2024, 5, 1), date(2026, 6, 30));
        let value = date(2025, 2, 15);
        let next = value_for_year(value, 2024, Some(&range));
        assert_eq!((next.year(), next.month()), (2024, 5));
    }

    #[test]
    fn year_change_without_range_keeps_the_month() {
        let value = date(2025, 11, 15);
        let next = value_for_year(value, 2030, None);
        assert_eq!((next.year(), next.month(), next.day()), (2030, 11, 15));
    }

    #[test]
    fn month_change_never_alters_the_year() {
        let value = date(2024, 3, 15);
        let next = value_for_month(value, 9);
        assert_eq!((next.year(), next.month()), (2024, 9));
    }

    #[test]
    fn same_year_range_restricts_options_like_the_calendar() {
        // value = 2024-03-15, range = [2024-01-01, 2024-06-30]: the year list
        // collapses to 2024 and months past June are never offered.
        let range = CalendarRange::new(date(2024, 1, 1), date(2024, 6, 30));
        let years = year_options(2024, 10, 20, Some(&range));
        assert_eq!(years, vec![2024]);
        let months = month_options(2024, Some(&range));
        assert_eq!(months, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn stepping_ignores_the_range() {
        let range = CalendarRange::new(date(2024, 1, 1), date(2024, 6, 30));
        let value = date(2024, 6, 15);
        let next = value.step(CalendarMode::Month, 1);
        // The candidate leaves the range; clamping is the owner's decision.
        assert_eq!((next.year(), next.month()), (2024, 7));
        assert!(range.end().month() < next.month());
    }

    // Args construction builds a `Modifier`, which is only valid during a
    // component's build phase; wrap the assertions in a component like the
    // crate's doctests do. A single test keeps the shared runtime to one
    // thread.
    #[test]
    fn test_tags_follow_the_prefix_contract() {
        #[tessera]
        fn check() {
            let args = CalendarHeaderArgs::default();
            assert_eq!(args.test_tag("header"), "fullcalendar-header");
            assert_eq!(args.test_tag("year-select"), "fullcalendar-year-select");
            assert_eq!(args.test_tag("month-select"), "fullcalendar-month-select");
            assert_eq!(args.test_tag("navigation"), "fullcalendar-navigation");
            assert_eq!(
                args.test_tag("navigation-previous"),
                "fullcalendar-navigation-previous"
            );
            assert_eq!(
                args.test_tag("navigation-next"),
                "fullcalendar-navigation-next"
            );
            assert_eq!(args.test_tag("today-button"), "fullcalendar-today-button");

            let custom = CalendarHeaderArgs::default().test_tag_prefix("my-calendar");
            assert_eq!(custom.test_tag("header"), "my-calendar-header");

            assert_eq!(args.side_tag("left"), "fullcalendar-header-left");
            let fullscreen = CalendarHeaderArgs::default().fullscreen(true);
            assert_eq!(
                fullscreen.side_tag("right"),
                "fullcalendar-header-right-fullscreen"
            );
        }
        check();
    }
}
