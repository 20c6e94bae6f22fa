pub mod test_scenarios;
