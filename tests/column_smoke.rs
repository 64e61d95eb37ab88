use liquid_engine::{step_grids, FlowConfig, Grid, LiquidWorld};

#[test]
fn column_pours_down_and_settles() {
    let mut world = LiquidWorld::new(1, 3).unwrap();
    world.add_liquid(0, 0, 2.0).unwrap();

    let mut ticks = 0;
    while !world.grid().is_quiescent() {
        world.step();
        ticks += 1;
        assert!(ticks < 50, "column never settled");
    }

    assert_eq!(world.liquid_at(0, 0).unwrap(), 0.0);
    assert!((world.liquid_at(0, 1).unwrap() - 0.8).abs() < 1e-4);
    assert!((world.liquid_at(0, 2).unwrap() - 1.2).abs() < 1e-4);
    assert!((world.total_liquid() - 2.0).abs() < 1e-4);
}

#[test]
fn config_round_trips_through_json() {
    let json = r#"{"flow_speed":0.5,"settle_ticks":4}"#;
    let config = FlowConfig::from_json(json).unwrap();
    assert_eq!(config.settle_ticks, 4);
    assert_eq!(config.max_value, 1.0);

    let mut grids = vec![Grid::new(4, 4).unwrap(), Grid::new(2, 5).unwrap()];
    grids[0].add_liquid(1, 0, 1.0).unwrap();
    grids[1].add_liquid(0, 0, 1.0).unwrap();
    step_grids(&config, &mut grids).unwrap();
    assert!(grids.iter().all(|g| g.total_liquid() <= 1.0 + 1e-6));
}
