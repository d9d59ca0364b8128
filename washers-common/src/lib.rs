pub mod team;

pub mod bundles;

pub mod theme;

pub mod rules;

pub mod match_snapshot;
