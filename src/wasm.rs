//! JavaScript bindings for the dashboard.
//!
//! Inputs and outputs are plain JS objects in the dashboard's camelCase
//! shape. An omitted or `null` config uses the defaults; omitted config
//! fields fall back individually.
//!
//! ```js
//! import { runExhaustive } from "habitat-assign";
//! const result = runExhaustive(habitats, species, { maxSpeciesPerHabitat: 3 });
//! ```

use wasm_bindgen::prelude::*;

use crate::compat;
use crate::models::{Habitat, Species};
use crate::optimizer::{self, AssignmentConfig, AssignmentResult};
use crate::validation;

fn parse_inputs(
    habitats: JsValue,
    species: JsValue,
) -> Result<(Vec<Habitat>, Vec<Species>), JsValue> {
    let habitats: Vec<Habitat> = serde_wasm_bindgen::from_value(habitats)?;
    let species: Vec<Species> = serde_wasm_bindgen::from_value(species)?;
    Ok((habitats, species))
}

fn parse_config(config: JsValue) -> Result<AssignmentConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(AssignmentConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(config)?)
}

fn to_js(result: &AssignmentResult) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(result)?)
}

/// Runs the exhaustive strategy.
#[wasm_bindgen(js_name = runExhaustive)]
pub fn run_exhaustive(
    habitats: JsValue,
    species: JsValue,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let (habitats, species) = parse_inputs(habitats, species)?;
    let config = parse_config(config)?;
    to_js(&optimizer::run_exhaustive(&habitats, &species, &config))
}

/// Runs the greedy strategy.
#[wasm_bindgen(js_name = runGreedy)]
pub fn run_greedy(
    habitats: JsValue,
    species: JsValue,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let (habitats, species) = parse_inputs(habitats, species)?;
    let config = parse_config(config)?;
    to_js(&optimizer::run_greedy(&habitats, &species, &config))
}

/// Compatibility of one species with one habitat.
#[wasm_bindgen(js_name = scoreCompatibility)]
pub fn score_compatibility(habitat: JsValue, species: JsValue) -> Result<f64, JsValue> {
    let habitat: Habitat = serde_wasm_bindgen::from_value(habitat)?;
    let species: Species = serde_wasm_bindgen::from_value(species)?;
    Ok(compat::score(&habitat, &species))
}

/// Integrity problems in the inputs, as messages. Empty when valid.
#[wasm_bindgen(js_name = validateInputs)]
pub fn validate_inputs(habitats: JsValue, species: JsValue) -> Result<Vec<String>, JsValue> {
    let (habitats, species) = parse_inputs(habitats, species)?;
    Ok(validation::validate_inputs(&habitats, &species)
        .iter()
        .map(ToString::to_string)
        .collect())
}
