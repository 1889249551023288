//! Per-session selection state for the location inputs.
//!
//! - Each field tracks its text, the chosen location and the latest suggestions.
//! - Every edit issues a new [`LookupTicket`]; results carrying an older ticket
//!   are dropped, which both coalesces debounced keystrokes and discards
//!   out-of-order responses.

use std::collections::HashMap;

use super::entities::{Field, Location};
use super::route::{plan_route, RoutePlan};
use super::shipping::{
    estimate_shipment, parse_weight, EstimateError, ShippingEstimate, ShippingTier,
};

/// Identifies one lookup issued for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LookupTicket {
    pub field: Field,
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldState {
    pub text: String,
    pub selected: Option<Location>,
    pub suggestions: Vec<Location>,
    seq: u64,
}

impl FieldState {
    fn clear(&mut self) {
        self.text.clear();
        self.selected = None;
        self.suggestions.clear();
        // Outstanding lookups for the old text must not repopulate the list.
        self.seq += 1;
    }
}

/// Ordered stops, unique by location id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StopSet {
    stops: Vec<Location>,
}

impl StopSet {
    /// Returns false if a stop with the same id is already queued.
    pub fn add(&mut self, location: Location) -> bool {
        if self.contains(&location.id) {
            return false;
        }
        self.stops.push(location);
        true
    }

    /// Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &str) -> Option<Location> {
        let idx = self.stops.iter().position(|stop| stop.id == id)?;
        Some(self.stops.remove(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stops.iter().any(|stop| stop.id == id)
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn clear(&mut self) {
        self.stops.clear();
    }
}

/// What the UI can do to the location inputs.
pub trait InputHandler {
    /// Records typed text and returns the ticket the lookup must present.
    fn on_text_input(&mut self, field: Field, text: &str) -> LookupTicket;

    /// True if `ticket` still belongs to the newest edit of its field.
    fn is_current(&self, ticket: LookupTicket) -> bool;

    /// Stores lookup results; returns false when the ticket is stale.
    fn accept_suggestions(&mut self, ticket: LookupTicket, results: Vec<Location>) -> bool;

    /// A suggestion was clicked.
    fn select_suggestion(&mut self, field: Field, location: Location);

    /// Enter pressed: picks the first suggestion, if any.
    fn submit_entry(&mut self, field: Field) -> Option<Location>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    fields: HashMap<Field, FieldState>,
    pub stops: StopSet,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            fields: Field::ALL
                .into_iter()
                .map(|field| (field, FieldState::default()))
                .collect(),
            stops: StopSet::default(),
        }
    }

    /// Drops every selection and stop. Outstanding lookups become stale.
    pub fn reset(&mut self) {
        for state in self.fields.values_mut() {
            state.clear();
        }
        self.stops.clear();
    }

    pub fn field(&self, field: Field) -> &FieldState {
        // Every field is inserted in `new`.
        &self.fields[&field]
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        self.fields.entry(field).or_default()
    }

    pub fn selected(&self, field: Field) -> Option<&Location> {
        self.field(field).selected.as_ref()
    }

    pub fn clear_suggestions(&mut self, field: Field) {
        self.field_mut(field).suggestions.clear();
    }

    pub fn remove_stop(&mut self, id: &str) -> Option<Location> {
        self.stops.remove(id)
    }

    fn require(&self, field: Field) -> Result<&Location, EstimateError> {
        self.selected(field).ok_or(EstimateError::MissingSelection(field))
    }

    /// Validates the shipping form and prices the origin → destination leg.
    pub fn quote_shipment(
        &self,
        weight_raw: &str,
        tier_raw: &str,
    ) -> Result<ShippingEstimate, EstimateError> {
        let origin = self.require(Field::Origin)?;
        let destination = self.require(Field::Destination)?;
        let weight = parse_weight(weight_raw)?;
        let tier = tier_raw.parse::<ShippingTier>()?;
        estimate_shipment(origin, destination, weight, tier)
    }

    /// Validates the route form and plans the queued stops.
    pub fn plan_stops(&self, weight_raw: &str) -> Result<RoutePlan, EstimateError> {
        let start = self.require(Field::Start)?;
        if self.stops.is_empty() {
            return Err(EstimateError::EmptyRoute);
        }
        let weight = parse_weight(weight_raw)?;
        plan_route(start, self.stops.as_slice(), weight)
    }

    fn record_selection(&mut self, field: Field, location: Location) {
        if field.is_stop_entry() {
            if !self.stops.add(location.clone()) {
                log::debug!("stop {} already queued", location.id);
            }
            self.field_mut(field).clear();
        } else {
            let state = self.field_mut(field);
            state.text = location.display_name.clone();
            state.selected = Some(location);
            state.suggestions.clear();
            state.seq += 1;
        }
    }
}

impl InputHandler for Session {
    fn on_text_input(&mut self, field: Field, text: &str) -> LookupTicket {
        let state = self.field_mut(field);
        if state.text != text {
            state.selected = None;
        }
        state.text = text.to_string();
        state.seq += 1;
        LookupTicket {
            field,
            seq: state.seq,
        }
    }

    fn is_current(&self, ticket: LookupTicket) -> bool {
        self.field(ticket.field).seq == ticket.seq
    }

    fn accept_suggestions(&mut self, ticket: LookupTicket, results: Vec<Location>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "dropping stale lookup for {} (seq {})",
                ticket.field,
                ticket.seq
            );
            return false;
        }
        self.field_mut(ticket.field).suggestions = results;
        true
    }

    fn select_suggestion(&mut self, field: Field, location: Location) {
        self.record_selection(field, location);
    }

    fn submit_entry(&mut self, field: Field) -> Option<Location> {
        let first = self.field(field).suggestions.first().cloned()?;
        self.record_selection(field, first.clone());
        Some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GeoPoint;

    fn place(id: &str) -> Location {
        Location {
            id: id.to_string(),
            point: GeoPoint { lat: 45.0, lng: -75.0 },
            display_name: format!("{id}, Ontario"),
            full_address: format!("{id}, Ontario, Canada"),
            postal_code: None,
        }
    }

    #[test]
    fn editing_text_clears_selection() {
        let mut session = Session::new();
        session.select_suggestion(Field::Origin, place("ottawa"));
        assert_eq!(session.selected(Field::Origin).map(|l| l.id.as_str()), Some("ottawa"));
        assert_eq!(session.field(Field::Origin).text, "ottawa, Ontario");

        session.on_text_input(Field::Origin, "ottawa, Ontari");
        assert!(session.selected(Field::Origin).is_none());
    }

    #[test]
    fn stale_tickets_are_rejected() {
        let mut session = Session::new();
        let first = session.on_text_input(Field::Destination, "Mon");
        let second = session.on_text_input(Field::Destination, "Montr");

        assert!(!session.is_current(first));
        assert!(session.is_current(second));

        assert!(session.accept_suggestions(second, vec![place("montreal")]));
        assert!(!session.accept_suggestions(first, vec![place("monaco")]));
        assert_eq!(session.field(Field::Destination).suggestions, vec![place("montreal")]);
    }

    #[test]
    fn tickets_are_per_field() {
        let mut session = Session::new();
        let origin = session.on_text_input(Field::Origin, "Tor");
        session.on_text_input(Field::Destination, "Van");
        assert!(session.is_current(origin));
    }

    #[test]
    fn selecting_in_stop_field_queues_and_clears() {
        let mut session = Session::new();
        let ticket = session.on_text_input(Field::Stop, "Kingston");
        session.accept_suggestions(ticket, vec![place("kingston")]);

        session.select_suggestion(Field::Stop, place("kingston"));

        assert_eq!(session.stops.len(), 1);
        assert!(session.field(Field::Stop).text.is_empty());
        assert!(session.field(Field::Stop).suggestions.is_empty());
        assert!(!session.is_current(ticket));
    }

    #[test]
    fn enter_in_stop_field_takes_first_suggestion() {
        let mut session = Session::new();
        let ticket = session.on_text_input(Field::Stop, "Lon");
        session.accept_suggestions(ticket, vec![place("london"), place("longueuil")]);

        let picked = session.submit_entry(Field::Stop);

        assert_eq!(picked.map(|l| l.id), Some("london".to_string()));
        assert!(session.stops.contains("london"));
        assert!(!session.stops.contains("longueuil"));
    }

    #[test]
    fn enter_without_suggestions_does_nothing() {
        let mut session = Session::new();
        session.on_text_input(Field::Stop, "zzz");
        assert_eq!(session.submit_entry(Field::Stop), None);
        assert!(session.stops.is_empty());
    }

    #[test]
    fn duplicate_stops_are_ignored() {
        let mut session = Session::new();
        session.select_suggestion(Field::Stop, place("sudbury"));
        session.select_suggestion(Field::Stop, place("sudbury"));
        assert_eq!(session.stops.len(), 1);
    }

    #[test]
    fn removing_a_stop_by_id() {
        let mut session = Session::new();
        for id in ["a", "b", "c"] {
            session.select_suggestion(Field::Stop, place(id));
        }

        assert!(session.remove_stop("b").is_some());
        assert_eq!(session.stops.len(), 2);
        assert!(!session.stops.contains("b"));

        assert!(session.remove_stop("b").is_none());
        assert!(session.remove_stop("missing").is_none());
        assert_eq!(session.stops.len(), 2);
    }

    fn placed(id: &str, lat: f64, lng: f64) -> Location {
        Location {
            point: GeoPoint { lat, lng },
            ..place(id)
        }
    }

    #[test]
    fn quote_requires_both_selections() {
        let mut session = Session::new();
        assert_eq!(
            session.quote_shipment("10", "standard"),
            Err(EstimateError::MissingSelection(Field::Origin))
        );

        session.select_suggestion(Field::Origin, placed("toronto", 43.65, -79.38));
        assert_eq!(
            session.quote_shipment("10", "standard"),
            Err(EstimateError::MissingSelection(Field::Destination))
        );

        session.select_suggestion(Field::Destination, placed("montreal", 45.50, -73.57));
        let estimate = session.quote_shipment("10", "standard").expect("valid quote");
        assert_eq!(estimate.distance_km, 504);
    }

    #[test]
    fn quote_rejects_bad_form_values() {
        let mut session = Session::new();
        session.select_suggestion(Field::Origin, placed("toronto", 43.65, -79.38));
        session.select_suggestion(Field::Destination, placed("toronto", 43.65, -79.38));

        assert_eq!(
            session.quote_shipment("-1", "standard"),
            Err(EstimateError::NonPositiveWeight)
        );
        assert_eq!(
            session.quote_shipment("5", "teleport"),
            Err(EstimateError::UnknownTier("teleport".to_string()))
        );
        assert_eq!(
            session.quote_shipment("5", "express"),
            Err(EstimateError::SameLocation)
        );
    }

    #[test]
    fn typing_after_selection_invalidates_quote() {
        let mut session = Session::new();
        session.select_suggestion(Field::Origin, placed("toronto", 43.65, -79.38));
        session.select_suggestion(Field::Destination, placed("montreal", 45.50, -73.57));
        session.on_text_input(Field::Destination, "Montreal!");
        assert_eq!(
            session.quote_shipment("10", "standard"),
            Err(EstimateError::MissingSelection(Field::Destination))
        );
    }

    #[test]
    fn plan_requires_start_and_stops() {
        let mut session = Session::new();
        assert_eq!(
            session.plan_stops("3"),
            Err(EstimateError::MissingSelection(Field::Start))
        );

        session.select_suggestion(Field::Start, placed("S", 45.0, -80.0));
        assert_eq!(session.plan_stops("3"), Err(EstimateError::EmptyRoute));

        session.select_suggestion(Field::Stop, placed("C", 45.0, -75.0));
        session.select_suggestion(Field::Stop, placed("A", 45.0, -79.0));
        let plan = session.plan_stops("3").expect("valid plan");
        let order: Vec<&str> = plan.route.sequence.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(order, vec!["S", "A", "C"]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::new();
        session.select_suggestion(Field::Start, place("barrie"));
        session.select_suggestion(Field::Stop, place("orillia"));
        let pending = session.on_text_input(Field::Origin, "Wat");

        session.reset();

        assert!(session.selected(Field::Start).is_none());
        assert!(session.stops.is_empty());
        assert!(!session.is_current(pending));
    }
}
