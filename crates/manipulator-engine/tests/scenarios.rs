//! End-to-end scenarios exercising the full engine surface: validation,
//! optimization, and simulation together, the way the session layer drives
//! them.

use manipulator_engine::{expand, optimize, parse, simulate, validate};
use manipulator_types::{CellCoord, GridConfig, ManipulatorState, Sample, SampleId};

fn world_3x3_with_sample() -> (GridConfig, ManipulatorState, Vec<Sample>) {
    let grid = GridConfig::new(3, 3);
    let manipulator = ManipulatorState::at(CellCoord::ORIGIN);
    let samples = vec![Sample {
        id: SampleId::indexed(0),
        position: CellCoord::new(1, 0),
    }];
    (grid, manipulator, samples)
}

#[test]
fn drive_past_a_sample_without_picking_it_up() {
    let (grid, manipulator, samples) = world_3x3_with_sample();

    // Right, right, pick-up over an empty cell, down, down.
    let result = simulate("ППОНН", &manipulator, &samples, grid);
    assert!(result.is_ok());
    if let Ok(result) = result {
        assert_eq!(result.final_manipulator.position, CellCoord::new(2, 2));
        assert_eq!(result.final_manipulator.holding, None);
        // s0 untouched at (1,0).
        assert_eq!(
            result.final_samples.first().map(|s| s.position),
            Some(CellCoord::new(1, 0))
        );
    }
}

#[test]
fn pick_up_and_release_in_place() {
    let (grid, _, samples) = world_3x3_with_sample();
    let manipulator = ManipulatorState::at(CellCoord::new(1, 0));

    let result = simulate("ОБ", &manipulator, &samples, grid);
    assert!(result.is_ok());
    if let Ok(result) = result {
        // After pick-up the first step holds s0; after release the hold is
        // clear and s0 sits where the manipulator stands.
        assert_eq!(
            result
                .steps
                .first()
                .and_then(|s| s.manipulator.holding.clone()),
            Some(SampleId::indexed(0))
        );
        assert_eq!(result.final_manipulator.holding, None);
        assert_eq!(
            result.final_samples.first().map(|s| s.position),
            Some(CellCoord::new(1, 0))
        );
    }
}

#[test]
fn ferry_a_sample_across_the_grid() {
    let grid = GridConfig::new(5, 5);
    let manipulator = ManipulatorState::at(CellCoord::ORIGIN);
    let samples = vec![
        Sample {
            id: SampleId::indexed(0),
            position: CellCoord::ORIGIN,
        },
        Sample {
            id: SampleId::indexed(1),
            position: CellCoord::new(4, 4),
        },
    ];

    // Pick up s0, carry it to (2,2), drop it there.
    let result = simulate("О ПП НН Б", &manipulator, &samples, grid);
    assert!(result.is_ok());
    if let Ok(result) = result {
        assert_eq!(
            result.final_samples.first().map(|s| s.position),
            Some(CellCoord::new(2, 2))
        );
        // The other sample never moved.
        assert_eq!(
            result.final_samples.get(1).map(|s| s.position),
            Some(CellCoord::new(4, 4))
        );
    }
}

#[test]
fn optimized_string_in_result_matches_standalone_optimize() {
    let (grid, manipulator, samples) = world_3x3_with_sample();
    let raw = "ЛПЛПЛПЛП";

    let result = simulate(raw, &manipulator, &samples, grid);
    let standalone = optimize(raw);
    assert_eq!(standalone.as_deref(), Ok("4(ЛП)"));
    assert_eq!(result.map(|r| r.optimized).ok(), standalone.ok());
}

#[test]
fn optimized_output_replays_to_the_same_world() {
    let (grid, manipulator, samples) = world_3x3_with_sample();
    let raw = "ППННЛЛВВППННЛЛВВ";

    let direct = simulate(raw, &manipulator, &samples, grid).ok();
    let optimized = optimize(raw).unwrap_or_default();
    let reexpanded = expand(&optimized).unwrap_or_default();
    assert_eq!(parse(raw).ok(), Some(reexpanded.clone()));

    let replayed = manipulator_engine::simulate_symbols(&reexpanded, &manipulator, &samples, grid);
    assert_eq!(
        direct.map(|r| (r.final_manipulator, r.final_samples)),
        Some((replayed.final_manipulator, replayed.final_samples))
    );
}

#[test]
fn validation_gates_the_whole_pipeline() {
    let (grid, manipulator, samples) = world_3x3_with_sample();

    assert!(validate("  \n ").is_err());
    assert!(simulate("  \n ", &manipulator, &samples, grid).is_err());
    assert!(simulate("ПН!", &manipulator, &samples, grid).is_err());
}
