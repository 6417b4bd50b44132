//! Toolbar Widget
//! Fixed comparison controls mounted into the two side panels.

use egui::{Color32, ComboBox, RichText};

/// Mount ids of the two toolbar panels.
pub const TOOLBAR_MOUNTS: [&str; 2] = ["toolbarLeft", "toolbarRight"];

/// Dropdown options, fixed order.
pub const PARAMETER_OPTIONS: [&str; 3] = ["Revenue", "Profit", "Employee Count"];

pub const COMPANY_COUNT_MIN: u32 = 1;
pub const COMPANY_COUNT_MAX: u32 = 25;
const DEFAULT_COMPANY_COUNT: u32 = 10;

/// The fixed control content mounted into every toolbar panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarFragment {
    pub parameter_label: &'static str,
    pub parameter_options: [&'static str; 3],
    pub preference_label: &'static str,
    pub preference_options: [&'static str; 2],
    pub min_label: &'static str,
    pub max_label: &'static str,
    pub count_label: &'static str,
    pub count_min: u32,
    pub count_max: u32,
}

impl ToolbarFragment {
    /// The standard fragment; every mount point receives this content.
    pub fn standard() -> Self {
        Self {
            parameter_label: "Parameter:",
            parameter_options: PARAMETER_OPTIONS,
            preference_label: "Preference:",
            preference_options: ["Prefer Higher Value", "Prefer Lower Value"],
            min_label: "Min Value:",
            max_label: "Max Value:",
            count_label: "Number of Companies:",
            count_min: COMPANY_COUNT_MIN,
            count_max: COMPANY_COUNT_MAX,
        }
    }
}

/// Preference toggle direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preference {
    #[default]
    HigherBetter,
    LowerBetter,
}

/// Mount-local control values.
///
/// Interacting with a toolbar mutates only this state; the charts never
/// observe it.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarState {
    pub parameter: String,
    pub preference: Preference,
    pub min_value: f64,
    pub max_value: f64,
    company_count: u32,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            parameter: PARAMETER_OPTIONS[0].to_string(),
            preference: Preference::default(),
            min_value: 0.0,
            max_value: 0.0,
            company_count: DEFAULT_COMPANY_COUNT,
        }
    }
}

impl ToolbarState {
    pub fn company_count(&self) -> u32 {
        self.company_count
    }

    /// Writes clamp to [`COMPANY_COUNT_MIN`, `COMPANY_COUNT_MAX`].
    pub fn set_company_count(&mut self, count: u32) {
        self.company_count = count.clamp(COMPANY_COUNT_MIN, COMPANY_COUNT_MAX);
    }
}

/// One toolbar bound to a named mount point.
pub struct Toolbar {
    mount_id: &'static str,
    fragment: ToolbarFragment,
    pub state: ToolbarState,
}

impl Toolbar {
    pub fn mount(mount_id: &'static str) -> Self {
        Self {
            mount_id,
            fragment: ToolbarFragment::standard(),
            state: ToolbarState::default(),
        }
    }

    pub fn mount_id(&self) -> &'static str {
        self.mount_id
    }

    pub fn fragment(&self) -> &ToolbarFragment {
        &self.fragment
    }

    /// Draw the toolbar controls into the mount's panel.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let label_width = 110.0;
        let combo_width = 150.0;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("Comparison Controls")
                    .size(15.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        // Parameter dropdown
        ui.horizontal(|ui| {
            ui.add_sized(
                [label_width, 20.0],
                egui::Label::new(self.fragment.parameter_label),
            );
            ComboBox::from_id_salt(format!("{}_parameter", self.mount_id))
                .width(combo_width)
                .selected_text(&self.state.parameter)
                .show_ui(ui, |ui| {
                    for option in self.fragment.parameter_options {
                        if ui
                            .selectable_label(self.state.parameter == option, option)
                            .clicked()
                        {
                            self.state.parameter = option.to_string();
                        }
                    }
                });
        });

        ui.add_space(8.0);

        // Preference toggle pair
        ui.label(self.fragment.preference_label);
        ui.horizontal(|ui| {
            let [higher, lower] = self.fragment.preference_options;
            if ui
                .selectable_label(self.state.preference == Preference::HigherBetter, higher)
                .clicked()
            {
                self.state.preference = Preference::HigherBetter;
            }
            if ui
                .selectable_label(self.state.preference == Preference::LowerBetter, lower)
                .clicked()
            {
                self.state.preference = Preference::LowerBetter;
            }
        });

        ui.add_space(8.0);

        // Min / max value inputs
        ui.horizontal(|ui| {
            ui.add_sized(
                [label_width, 20.0],
                egui::Label::new(self.fragment.min_label),
            );
            ui.add(egui::DragValue::new(&mut self.state.min_value).speed(1.0));
        });
        ui.horizontal(|ui| {
            ui.add_sized(
                [label_width, 20.0],
                egui::Label::new(self.fragment.max_label),
            );
            ui.add(egui::DragValue::new(&mut self.state.max_value).speed(1.0));
        });

        ui.add_space(8.0);

        // Company count, clamped input
        ui.horizontal(|ui| {
            ui.add_sized(
                [label_width, 20.0],
                egui::Label::new(self.fragment.count_label),
            );
            let mut count = self.state.company_count();
            ui.add(
                egui::DragValue::new(&mut count)
                    .speed(1.0)
                    .range(self.fragment.count_min..=self.fragment.count_max),
            );
            self.state.set_company_count(count);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_mounts_receive_identical_fragments() {
        let left = Toolbar::mount(TOOLBAR_MOUNTS[0]);
        let right = Toolbar::mount(TOOLBAR_MOUNTS[1]);
        assert_eq!(left.fragment(), right.fragment());
        assert_ne!(left.mount_id(), right.mount_id());
    }

    #[test]
    fn dropdown_options_keep_fixed_order() {
        let fragment = ToolbarFragment::standard();
        assert_eq!(
            fragment.parameter_options,
            ["Revenue", "Profit", "Employee Count"]
        );
    }

    #[test]
    fn company_count_bounds_are_one_and_twenty_five() {
        let fragment = ToolbarFragment::standard();
        assert_eq!(fragment.count_min, 1);
        assert_eq!(fragment.count_max, 25);
    }

    #[test]
    fn company_count_writes_clamp_to_bounds() {
        let mut state = ToolbarState::default();
        state.set_company_count(0);
        assert_eq!(state.company_count(), 1);
        state.set_company_count(99);
        assert_eq!(state.company_count(), 25);
        state.set_company_count(12);
        assert_eq!(state.company_count(), 12);
    }

    #[test]
    fn default_state_selects_first_option_and_higher_preference() {
        let state = ToolbarState::default();
        assert_eq!(state.parameter, "Revenue");
        assert_eq!(state.preference, Preference::HigherBetter);
    }
}
