use crate::core::unit::SquareMeters;
use crate::error::{Error, Result};
use crate::estimate::{SavedTotals, SavingsReport};
use crate::widget::{
    DamageType, Lead, LeadSubmission, PageContext, Scenario, WidgetConfig, WidgetResults,
};

//Slider position the pages start on
const INITIAL_AREA: SquareMeters = SquareMeters(6.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Input,
    LeadCapture,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetSelection {
    pub area: SquareMeters,
    pub damage_type: Option<DamageType>,
    pub view: Scenario,
}

//Holds the visitor's input and the phase of the flow, results are
//recomputed from those on demand
#[derive(Debug, Clone)]
pub struct WidgetController {
    config: WidgetConfig,
    selection: WidgetSelection,
    phase: Phase,
}

impl WidgetController {
    pub fn new(config: WidgetConfig) -> Self {
        let selection = WidgetSelection {
            area: INITIAL_AREA,
            damage_type: config.default_damage_type(),
            view: Scenario::Repair,
        };
        Self {
            config,
            selection,
            phase: Phase::Input,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn selection(&self) -> &WidgetSelection {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_area(&mut self, value: f64) -> Result<()> {
        self.selection.area = SquareMeters::validated(value)?;
        tracing::trace!("Area set to {}", self.selection.area);
        Ok(())
    }

    pub fn area_input(&mut self, raw: &str) -> Result<()> {
        self.selection.area = SquareMeters::parse(raw)?;
        tracing::trace!("Area set to {}", self.selection.area);
        Ok(())
    }

    pub fn select_damage_type(&mut self, damage_type: DamageType) -> Result<()> {
        if !self.config.supports(damage_type) {
            return Err(Error::UnsupportedDamageType(damage_type));
        }
        self.selection.damage_type = Some(damage_type);
        tracing::trace!("Damage type set to {}", damage_type);
        Ok(())
    }

    pub fn set_view(&mut self, view: Scenario) {
        self.selection.view = view;
    }

    pub fn proceed(&mut self) -> Result<()> {
        if self.config.requires_damage_selection() && self.selection.damage_type.is_none() {
            return Err(Error::MissingDamageType);
        }
        if self.phase == Phase::Input {
            self.phase = Phase::LeadCapture;
            tracing::debug!("Lead capture opened for {}", self.config.name());
        }
        Ok(())
    }

    //Reveals the results first and hands the submission back for
    //forwarding, the reveal never waits for the network
    pub fn submit_lead(&mut self, lead: Lead, page: PageContext) -> Result<LeadSubmission> {
        if self.phase == Phase::Input {
            return Err(Error::LeadCaptureNotOpen);
        }
        lead.validate()?;
        self.phase = Phase::Results;
        tracing::info!("Lead captured on {}, revealing results", self.config.name());
        Ok(LeadSubmission { lead, page })
    }

    //None until a complete lead has been submitted
    pub fn results(&self) -> Result<Option<WidgetResults>> {
        if self.phase != Phase::Results {
            return Ok(None);
        }
        let WidgetSelection {
            area,
            damage_type,
            view,
        } = self.selection;
        let estimate = self.config.estimate(area, damage_type, view)?;
        let savings = match view {
            Scenario::Repair => self.config.savings(area, damage_type)?.saved(),
            Scenario::Demolition => SavedTotals::zero(self.config.has_emissions()),
        };
        Ok(Some(WidgetResults {
            cost: estimate.cost,
            time_in_days: estimate.time_in_days,
            emissions: estimate.emissions,
            savings,
        }))
    }

    //Feed for the pages that chart baseline, treatment and saved
    pub fn savings_report(&self) -> Result<Option<SavingsReport>> {
        if self.phase != Phase::Results {
            return Ok(None);
        }
        self.config
            .savings(self.selection.area, self.selection.damage_type)
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unit::{Days, KilogramCo2e, NorwegianKrone};
    use crate::widget;

    fn lead() -> Lead {
        Lead {
            name: "Kari Nordmann".to_owned(),
            phone: "99887766".to_owned(),
            email: "kari@example.no".to_owned(),
        }
    }

    fn page() -> PageContext {
        PageContext {
            uri: "https://example.no/bevar".to_owned(),
            title: "Bevar badet".to_owned(),
        }
    }

    #[test]
    fn starts_on_the_input_step_with_the_slider_default() {
        let controller = WidgetController::new(widget::bevar());
        assert_eq!(controller.phase(), Phase::Input);
        assert_eq!(controller.selection().area, SquareMeters(6.0));
        assert_eq!(controller.selection().view, Scenario::Repair);
        assert_eq!(
            controller.selection().damage_type,
            Some(DamageType::Sisterne)
        );
    }

    #[test]
    fn results_are_hidden_until_the_lead_is_submitted() {
        let mut controller = WidgetController::new(widget::bevar());
        assert!(controller.results().unwrap().is_none());

        controller.proceed().unwrap();
        assert!(controller.results().unwrap().is_none());

        controller.submit_lead(lead(), page()).unwrap();
        assert!(controller.results().unwrap().is_some());
    }

    #[test]
    fn full_flow_reveals_the_selected_repair() {
        let mut controller = WidgetController::new(widget::bevar());
        controller.set_area(10.0).unwrap();
        controller.select_damage_type(DamageType::Sluk).unwrap();
        controller.proceed().unwrap();
        let submission = controller.submit_lead(lead(), page()).unwrap();
        assert_eq!(submission.lead.email, "kari@example.no");

        let results = controller.results().unwrap().unwrap();
        assert_eq!(results.cost, NorwegianKrone(37500.0));
        assert_eq!(results.time_in_days, Days(1));
    }

    #[test]
    fn view_toggle_switches_between_the_scenarios() {
        let mut controller = WidgetController::new(widget::bevar());
        controller.set_area(10.0).unwrap();
        controller.proceed().unwrap();
        controller.submit_lead(lead(), page()).unwrap();

        controller.set_view(Scenario::Demolition);
        let results = controller.results().unwrap().unwrap();
        assert_eq!(results.cost, NorwegianKrone(85000.0));
        assert_eq!(results.time_in_days, Days(30));
        assert_eq!(results.savings.cost, NorwegianKrone(0.0));

        controller.set_view(Scenario::Repair);
        let results = controller.results().unwrap().unwrap();
        assert_eq!(results.cost, NorwegianKrone(47500.0));
        assert_eq!(results.savings.cost, NorwegianKrone(37500.0));
    }

    #[test]
    fn area_changes_after_the_reveal_recompute_the_results() {
        let mut controller = WidgetController::new(widget::mtek());
        controller.proceed().unwrap();
        controller.submit_lead(lead(), page()).unwrap();

        let before = controller.results().unwrap().unwrap();
        assert_eq!(before.savings.cost, NorwegianKrone(14500.0));

        controller.set_area(12.0).unwrap();
        let after = controller.results().unwrap().unwrap();
        assert_eq!(after.savings.cost, NorwegianKrone(12.0 * 9500.0 - 42500.0));
    }

    #[test]
    fn demolition_view_shows_nothing_saved() {
        let mut controller = WidgetController::new(widget::mtek());
        controller.proceed().unwrap();
        controller.submit_lead(lead(), page()).unwrap();

        controller.set_view(Scenario::Demolition);
        let results = controller.results().unwrap().unwrap();
        assert_eq!(results.cost, NorwegianKrone(57000.0));
        assert_eq!(results.savings.cost, NorwegianKrone(0.0));
        assert_eq!(results.savings.time, Days(0));
        assert_eq!(results.savings.emissions, Some(KilogramCo2e(0.0)));
        assert!(results.emissions.is_some());
    }

    #[test]
    fn damage_selection_is_required_where_offered_without_default() {
        let mut controller = WidgetController::new(widget::mtett());
        assert!(matches!(controller.proceed(), Err(Error::MissingDamageType)));

        controller.select_damage_type(DamageType::Gulv).unwrap();
        controller.proceed().unwrap();
        assert_eq!(controller.phase(), Phase::LeadCapture);
    }

    #[test]
    fn rejects_damage_types_from_other_calculators() {
        let mut controller = WidgetController::new(widget::bevar());
        assert!(matches!(
            controller.select_damage_type(DamageType::Vegg),
            Err(Error::UnsupportedDamageType(DamageType::Vegg))
        ));
    }

    #[test]
    fn lead_submission_needs_an_open_form() {
        let mut controller = WidgetController::new(widget::bevar());
        assert!(matches!(
            controller.submit_lead(lead(), page()),
            Err(Error::LeadCaptureNotOpen)
        ));
    }

    #[test]
    fn incomplete_leads_keep_the_results_hidden() {
        let mut controller = WidgetController::new(widget::bevar());
        controller.proceed().unwrap();

        let incomplete = Lead {
            name: String::new(),
            ..lead()
        };
        assert!(matches!(
            controller.submit_lead(incomplete, page()),
            Err(Error::IncompleteLead { field: "name" })
        ));
        assert_eq!(controller.phase(), Phase::LeadCapture);
        assert!(controller.results().unwrap().is_none());
    }

    #[test]
    fn invalid_area_input_is_rejected_and_keeps_the_previous_value() {
        let mut controller = WidgetController::new(widget::bevar());
        controller.area_input("12").unwrap();
        assert_eq!(controller.selection().area, SquareMeters(12.0));

        assert!(matches!(
            controller.area_input("stort"),
            Err(Error::NumberFormat(_))
        ));
        assert!(matches!(
            controller.area_input("75"),
            Err(Error::InvalidArea { .. })
        ));
        assert_eq!(controller.selection().area, SquareMeters(12.0));
    }

    #[test]
    fn savings_report_charts_the_three_columns() {
        let mut controller = WidgetController::new(widget::mtett());
        controller.set_area(9.0).unwrap();
        controller.select_damage_type(DamageType::Gulv).unwrap();
        controller.proceed().unwrap();
        controller.submit_lead(lead(), page()).unwrap();

        let report = controller.savings_report().unwrap().unwrap();
        assert_eq!(report.cost.baseline, NorwegianKrone(398000.0));
        assert_eq!(report.cost.treatment, NorwegianKrone(130000.0));
        assert_eq!(report.cost.saved, NorwegianKrone(268000.0));
        let emissions = report.emissions.unwrap();
        assert_eq!(emissions.baseline, KilogramCo2e(2518.25));
    }
}
