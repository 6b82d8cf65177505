//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the tablekeeper library.

use std::rc::Rc;

use tablekeeper::{Customer, Notice, Restaurant, RestaurantOptions};

/// Restaurant that records its notices.
pub type RecordingRestaurant = Restaurant<Vec<Notice>>;

/// Creates a recording restaurant with default policies.
#[allow(dead_code)]
pub fn restaurant(tables: u32) -> RecordingRestaurant {
    Restaurant::with_reporter(tables, Vec::new())
}

/// Creates a recording restaurant from options.
#[allow(dead_code)]
pub fn restaurant_with(options: RestaurantOptions) -> RecordingRestaurant {
    Restaurant::with_options(options, Vec::new())
}

/// Creates a shared customer handle.
#[allow(dead_code)]
pub fn customer(name: &str) -> Rc<Customer> {
    Customer::shared(name).expect("valid customer name")
}

/// Creates one handle per name, in order.
#[allow(dead_code)]
pub fn customers(names: &[&str]) -> Vec<Rc<Customer>> {
    names.iter().map(|name| customer(name)).collect()
}

/// Names of the customers still waiting, oldest first.
#[allow(dead_code)]
pub fn waiting_names(restaurant: &RecordingRestaurant) -> Vec<String> {
    restaurant
        .waiting_customers()
        .iter()
        .map(|c| c.name().to_string())
        .collect()
}

/// The recorded notices rendered as text.
#[allow(dead_code)]
pub fn notice_lines(restaurant: &RecordingRestaurant) -> Vec<String> {
    restaurant
        .reporter()
        .iter()
        .map(ToString::to_string)
        .collect()
}
