//! Central system ordering labels to make the session update sequence explicit.
//! Stages (high-level):
//! 1. WorldEvents (collision adapter + deferred-timer ticking emit messages)
//! 2. SessionFlow (session systems consume messages, mutate mode/resources)
//! 3. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct WorldEventSet; // destruction notices + timer fires produced here

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SessionFlowSet; // mode transitions + spawn/label side effects
