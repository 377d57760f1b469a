use proptest::prelude::*;
use smooth_curve::{catmull_rom, chaikin, taubin};
use smooth_math::{dvec2, Point2};

fn polyline(min: usize, max: usize) -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), min..max)
        .prop_map(|coords| coords.into_iter().map(|(x, y)| dvec2(x, y)).collect())
}

fn has_consecutive_duplicates(points: &[Point2]) -> bool {
    points.windows(2).any(|w| w[0] == w[1])
}

fn close(mut points: Vec<Point2>) -> Vec<Point2> {
    points.push(points[0]);
    points
}

proptest! {
    #[test]
    fn taubin_keeps_length(line in polyline(3, 24), iterations in 0usize..6) {
        let out = taubin(&line, 0.5, -0.53, iterations).unwrap();
        prop_assert_eq!(out.len(), line.len());
    }

    #[test]
    fn taubin_keeps_open_endpoints(line in polyline(3, 24)) {
        prop_assume!(line[0] != line[line.len() - 1]);
        let out = taubin(&line, 0.6, -0.65, 4).unwrap();
        prop_assert_eq!(out[0], line[0]);
        prop_assert_eq!(out[out.len() - 1], line[line.len() - 1]);
    }

    #[test]
    fn chaikin_kept_ends_length_law(line in polyline(3, 24), k in 0u32..5) {
        prop_assume!(line[0] != line[line.len() - 1]);
        let out = chaikin(&line, k, true).unwrap();
        prop_assert_eq!(out.len(), (1usize << k) * (line.len() - 2) + 2);
        prop_assert_eq!(out[0], line[0]);
        prop_assert_eq!(out[out.len() - 1], line[line.len() - 1]);
    }

    #[test]
    fn catmull_rom_length_and_joints(line in polyline(4, 16), subdivs in 1usize..6, alpha in 0.0f64..=1.0) {
        prop_assume!(!has_consecutive_duplicates(&line));
        let out = catmull_rom(&line, alpha, subdivs).unwrap();
        prop_assert_eq!(out.len(), subdivs * (line.len() - 1) + 1);
        let joints: Vec<Point2> = out.iter().copied().step_by(subdivs).collect();
        prop_assert_eq!(joints, line);
    }

    #[test]
    fn rings_stay_closed(open in polyline(3, 16)) {
        let ring = close(open);
        prop_assume!(!has_consecutive_duplicates(&ring));

        let out = taubin(&ring, 0.5, -0.53, 3).unwrap();
        prop_assert_eq!(out[0], out[out.len() - 1]);

        for k in 0u32..4 {
            let out = chaikin(&ring, k, true).unwrap();
            prop_assert_eq!(out[0], out[out.len() - 1]);
        }

        let out = catmull_rom(&ring, 0.5, 4).unwrap();
        prop_assert_eq!(out[0], out[out.len() - 1]);
    }
}
