//! A dropdown select control: a trigger surface with an anchored option
//! popup.
//!
//! ## Usage
//!
//! Use for compact single-choice pickers such as the header's year and month
//! selectors.
use derive_setters::Setters;
use tessera_ui::{
    CallbackWith, ComputedData, Constraint, CursorEventContent, DimensionValue, Dp, LayoutInput,
    LayoutOutput, LayoutSpec, MeasurementError, Modifier, Px, PxPosition, State, accesskit::Role,
    remember, tessera, use_context, winit,
};
use tracing::debug;

use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment},
    column::{ColumnArgs, column},
    modifier::{ModifierExt as _, SemanticsArgs},
    row::{RowArgs, row},
    scrollable::{ScrollableArgs, scrollable},
    shape_def::Shape,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::MaterialTheme,
};

const POPUP_GAP: Dp = Dp(4.0);
const POPUP_MAX_HEIGHT: Dp = Dp(256.0);
const POPUP_CORNER_RADIUS: Dp = Dp(4.0);
const OPTION_ROW_HEIGHT: Dp = Dp(36.0);
const OPTION_HORIZONTAL_PADDING: Dp = Dp(12.0);
const TRIGGER_HORIZONTAL_PADDING: Dp = Dp(10.0);
const TRIGGER_CARET_GAP: Dp = Dp(6.0);

/// Control heights for the select trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectSize {
    /// Full-size trigger for spacious layouts.
    #[default]
    Default,
    /// Compact trigger for dense layouts.
    Small,
}

impl SelectSize {
    fn trigger_height(self) -> Dp {
        match self {
            SelectSize::Default => Dp(40.0),
            SelectSize::Small => Dp(32.0),
        }
    }
}

/// One entry offered by a [`select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value reported through `on_select` when the option is chosen.
    pub value: i32,
    /// Text shown for the option.
    pub label: String,
}

impl SelectOption {
    /// Creates an option from its value and label.
    pub fn new(value: i32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
struct PopupBounds {
    origin: PxPosition,
    size: ComputedData,
}

/// Open/closed state and recorded geometry for a [`select`].
///
/// The trigger size and popup bounds are written during measurement and read
/// by the input handler to position the popup and detect outside clicks; this
/// is the select's only retained state.
#[derive(Default)]
pub struct SelectState {
    open: bool,
    trigger_size: Option<ComputedData>,
    popup_bounds: Option<PopupBounds>,
}

impl SelectState {
    /// Creates a closed select state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the popup is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the popup.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the popup.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Toggles the popup.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn is_outside(&self, position: PxPosition) -> bool {
        let inside_trigger = self
            .trigger_size
            .map(|size| contains(PxPosition::new(Px::ZERO, Px::ZERO), size, position))
            .unwrap_or(false);
        let inside_popup = self
            .popup_bounds
            .map(|bounds| contains(bounds.origin, bounds.size, position))
            .unwrap_or(false);
        !inside_trigger && !inside_popup
    }
}

/// Configuration options for [`select`].
#[derive(Clone, PartialEq, Setters)]
pub struct SelectArgs {
    /// Optional modifier chain applied to the select subtree.
    pub modifier: Modifier,
    /// Options offered by the popup, in display order.
    pub options: Vec<SelectOption>,
    /// Value of the currently selected option.
    pub selected: i32,
    /// Trigger height variant.
    pub size: SelectSize,
    /// Optional semantics test tag attached to the trigger.
    #[setters(strip_option, into)]
    pub test_tag: Option<String>,
    /// Optional accessibility label for the trigger.
    #[setters(strip_option, into)]
    pub accessibility_label: Option<String>,
    /// Callback invoked with the chosen option's value.
    #[setters(skip)]
    pub on_select: Option<CallbackWith<i32>>,
    /// Optional external state for the popup.
    ///
    /// When this is `None`, `select` creates and owns an internal state.
    #[setters(skip)]
    pub state: Option<State<SelectState>>,
}

impl SelectArgs {
    /// Sets the selection callback.
    pub fn on_select(mut self, on_select: impl Into<CallbackWith<i32>>) -> Self {
        self.on_select = Some(on_select.into());
        self
    }

    /// Sets an external select state.
    pub fn state(mut self, state: State<SelectState>) -> Self {
        self.state = Some(state);
        self
    }
}

impl Default for SelectArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new(),
            options: Vec::new(),
            selected: 0,
            size: SelectSize::Default,
            test_tag: None,
            accessibility_label: None,
            on_select: None,
            state: None,
        }
    }
}

/// # select
///
/// Render a dropdown select: a trigger showing the current option and, when
/// open, an anchored popup listing all options.
///
/// ## Usage
///
/// Use for single-choice pickers whose option list is too long for a
/// segmented control.
///
/// ## Parameters
///
/// - `args` — options, selection, and callbacks; see [`SelectArgs`].
///
/// The popup opens below the trigger, aligned to its start edge, at least as
/// wide as the trigger, and scrolls when taller than its maximum height. A
/// click outside the trigger and popup, or Escape, closes it without
/// emitting.
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use tessera_calendar::select::{SelectArgs, SelectOption, select};
/// # use tessera_components::theme::{MaterialTheme, material_theme};
///
/// # material_theme(MaterialTheme::default, || {
/// select(
///     &SelectArgs::default()
///         .options(vec![
///             SelectOption::new(2024, "2024"),
///             SelectOption::new(2025, "2025"),
///         ])
///         .selected(2024)
///         .on_select(|year: i32| {
///             assert!(year == 2024 || year == 2025);
///         }),
/// );
/// # });
/// # }
/// # component();
/// ```
#[tessera]
pub fn select(args: &SelectArgs) {
    let mut args = args.clone();
    let state = args.state.unwrap_or_else(|| remember(SelectState::new));
    args.state = Some(state);
    select_node(&args);
}

#[tessera]
fn select_node(args: &SelectArgs) {
    let state = args.state.expect("select_node requires state to be set");
    let args = args.clone();
    let open = state.with(|s| s.is_open());

    layout(SelectLayout {
        state,
        open,
        gap: Px::from(POPUP_GAP),
    });

    input_handler(move |input| {
        if !state.with(|s| s.is_open()) {
            return;
        }

        let escape_pressed = input.keyboard_events.drain(..).any(|event| {
            event.state == winit::event::ElementState::Pressed
                && matches!(
                    event.physical_key,
                    winit::keyboard::PhysicalKey::Code(winit::keyboard::KeyCode::Escape)
                )
        });

        let released_outside = input.cursor_events.iter().any(|event| {
            matches!(event.content, CursorEventContent::Released(_))
                && input
                    .cursor_position_rel
                    .map(|position| state.with(|s| s.is_outside(position)))
                    .unwrap_or(false)
        });

        if escape_pressed || released_outside {
            debug!("select popup dismissed");
            state.with_mut(|s| s.close());
        }
    });

    trigger(&args, state, open);

    if open {
        popup(&args, state);
    }
}

fn contains(origin: PxPosition, size: ComputedData, position: PxPosition) -> bool {
    position.x >= origin.x
        && position.y >= origin.y
        && position.x < origin.x + size.width
        && position.y < origin.y + size.height
}

fn trigger(args: &SelectArgs, state: State<SelectState>, open: bool) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    let label = args
        .options
        .iter()
        .find(|option| option.value == args.selected)
        .map(|option| option.label.clone())
        .unwrap_or_default();
    let caret = if open { "▴" } else { "▾" };

    let mut modifier = Modifier::new().size_in(None, None, Some(args.size.trigger_height()), None);
    if let Some(tag) = args.test_tag.clone() {
        modifier = modifier.semantics(SemanticsArgs::new().test_tag(tag));
    }

    let mut surface_args = SurfaceArgs::default()
        .modifier(modifier)
        .style(SurfaceStyle::Outlined {
            color: scheme.outline,
            width: Dp(1.0),
        })
        .shape(Shape::rounded_rectangle(POPUP_CORNER_RADIUS))
        .content_alignment(Alignment::Center)
        .on_click(move || {
            state.with_mut(|s| s.toggle());
        })
        .accessibility_role(Role::ComboBox);
    if let Some(accessibility_label) = args.accessibility_label.clone() {
        surface_args = surface_args.accessibility_label(accessibility_label);
    }

    surface(&SurfaceArgs::with_child(surface_args, move || {
        let label = label.clone();
        Modifier::new()
            .padding_symmetric(TRIGGER_HORIZONTAL_PADDING, Dp(0.0))
            .run(move || {
                let label = label.clone();
                row(
                    RowArgs::default().cross_axis_alignment(CrossAxisAlignment::Center),
                    move |scope| {
                        let label = label.clone();
                        scope.child(move || {
                            text(
                                &TextArgs::default()
                                    .text(label.clone())
                                    .size(typography.body_medium.font_size)
                                    .color(scheme.on_surface),
                            );
                        });
                        scope.child(|| {
                            spacer(&SpacerArgs::new(Modifier::new().width(TRIGGER_CARET_GAP)))
                        });
                        scope.child(move || {
                            text(
                                &TextArgs::default()
                                    .text(caret)
                                    .size(typography.label_small.font_size)
                                    .color(scheme.on_surface_variant),
                            );
                        });
                    },
                );
            });
    }));
}

fn popup(args: &SelectArgs, state: State<SelectState>) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let options = args.options.clone();
    let selected = args.selected;
    let on_select = args.on_select.clone();

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_high,
            })
            .shape(Shape::rounded_rectangle(POPUP_CORNER_RADIUS))
            .elevation(Dp(3.0))
            .block_input(true)
            .accessibility_role(Role::ListBox),
        move || {
            let options = options.clone();
            let on_select = on_select.clone();
            scrollable(
                &ScrollableArgs::default()
                    .modifier(Modifier::new().constrain(
                        Some(DimensionValue::WRAP),
                        Some(DimensionValue::Wrap {
                            min: None,
                            max: Some(POPUP_MAX_HEIGHT.into()),
                        }),
                    ))
                    .child(move || {
                        let options = options.clone();
                        let on_select = on_select.clone();
                        column(ColumnArgs::default(), move |scope| {
                            for option in options {
                                let on_select = on_select.clone();
                                scope.child(move || {
                                    option_row(
                                        option.clone(),
                                        option.value == selected,
                                        on_select.clone(),
                                        state,
                                    );
                                });
                            }
                        });
                    }),
            );
        },
    ));
}

fn option_row(
    option: SelectOption,
    selected: bool,
    on_select: Option<CallbackWith<i32>>,
    state: State<SelectState>,
) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let scheme = theme.color_scheme;
    let typography = theme.typography;

    let container_color = if selected {
        scheme.secondary_container
    } else {
        scheme.surface_container_high
    };
    let label_color = if selected {
        scheme.on_secondary_container
    } else {
        scheme.on_surface
    };
    let value = option.value;
    let label = option.label;

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(
                Modifier::new()
                    .fill_max_width()
                    .size_in(None, None, Some(OPTION_ROW_HEIGHT), None),
            )
            .style(SurfaceStyle::Filled {
                color: container_color,
            })
            .content_alignment(Alignment::CenterStart)
            .accessibility_role(Role::ListBoxOption)
            .accessibility_label(label.clone())
            .on_click(move || {
                if let Some(on_select) = &on_select {
                    on_select.call(value);
                }
                state.with_mut(|s| s.close());
            }),
        move || {
            let label = label.clone();
            Modifier::new()
                .padding_symmetric(OPTION_HORIZONTAL_PADDING, Dp(0.0))
                .run(move || {
                    text(
                        &TextArgs::default()
                            .text(label.clone())
                            .size(typography.body_medium.font_size)
                            .color(label_color),
                    );
                });
        },
    ));
}

#[derive(Clone)]
struct SelectLayout {
    state: State<SelectState>,
    open: bool,
    gap: Px,
}

impl PartialEq for SelectLayout {
    fn eq(&self, other: &Self) -> bool {
        self.open == other.open && self.gap == other.gap
    }
}

impl LayoutSpec for SelectLayout {
    fn measure(
        &self,
        input: &LayoutInput<'_>,
        output: &mut LayoutOutput<'_>,
    ) -> Result<ComputedData, MeasurementError> {
        let trigger_id = input.children_ids()[0];
        let trigger_size = input.measure_child_in_parent_constraint(trigger_id)?;
        output.place_child(trigger_id, PxPosition::new(Px::ZERO, Px::ZERO));

        let popup_bounds = if self.open && input.children_ids().len() > 1 {
            let popup_id = input.children_ids()[1];
            let popup_constraint = Constraint::new(
                DimensionValue::Wrap {
                    min: Some(trigger_size.width),
                    max: None,
                },
                DimensionValue::Wrap {
                    min: None,
                    max: None,
                },
            );
            let popup_size = input.measure_child(popup_id, &popup_constraint)?;
            let origin = PxPosition::new(Px::ZERO, trigger_size.height + self.gap);
            output.place_child(popup_id, origin);
            Some(PopupBounds {
                origin,
                size: popup_size,
            })
        } else {
            None
        };

        self.state.with_mut(|s| {
            s.trigger_size = Some(trigger_size);
            s.popup_bounds = popup_bounds;
        });

        Ok(trigger_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_test_covers_trigger_and_popup() {
        let mut state = SelectState::new();
        state.trigger_size = Some(ComputedData {
            width: Px(100),
            height: Px(32),
        });
        state.popup_bounds = Some(PopupBounds {
            origin: PxPosition::new(Px(0), Px(36)),
            size: ComputedData {
                width: Px(120),
                height: Px(200),
            },
        });

        assert!(!state.is_outside(PxPosition::new(Px(50), Px(10))));
        assert!(!state.is_outside(PxPosition::new(Px(110), Px(100))));
        assert!(state.is_outside(PxPosition::new(Px(50), Px(33))));
        assert!(state.is_outside(PxPosition::new(Px(-1), Px(10))));
        assert!(state.is_outside(PxPosition::new(Px(130), Px(100))));
    }

    #[test]
    fn missing_geometry_counts_as_outside() {
        let state = SelectState::new();
        assert!(state.is_outside(PxPosition::new(Px(0), Px(0))));
    }
}
