use maxdefense_algorithms::Strategy;
use maxdefense_challenges::*;
use maxdefense_runtime::*;
use std::fs;

const ARMOR_CSV: &str = "description^gold^defense
A^10^60
worthless rags^1^0
B^20^100
legendary plate^400^3000
C^30^120
D^45^130
";

fn armor(description: &str, cost: f64, defense: f64) -> ArmorItem {
    ArmorItem::new(description, cost, defense).unwrap()
}

#[test]
fn test_load_candidates_applies_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("armor.csv");
    fs::write(&path, ARMOR_CSV).unwrap();

    let mut settings = Settings::new(&path);
    settings.filter.max_items = 3;
    let candidates = load_candidates(&settings).unwrap();
    let names: Vec<&str> = candidates.iter().map(|a| a.description()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    settings.database = dir.path().join("missing.csv");
    assert!(load_candidates(&settings).is_err());
}

#[test]
fn test_run_strategy() {
    let candidates = vec![
        armor("A", 10.0, 60.0),
        armor("B", 20.0, 100.0),
        armor("C", 30.0, 120.0),
    ];

    let greedy = run_strategy(Strategy::Greedy, &candidates, 50.0).unwrap();
    assert_eq!(greedy.strategy, Strategy::Greedy);
    assert_eq!(greedy.num_candidates, 3);
    assert_eq!(greedy.selection.total_defense, 160.0);

    let exhaustive = run_strategy(Strategy::Exhaustive, &candidates, 50.0).unwrap();
    assert_eq!(exhaustive.selection.total_defense, 220.0);
}

#[test]
fn test_run_strategy_rejects_oversized_exhaustive() {
    let candidates: Catalog = (0..70)
        .map(|i| armor(&format!("armor {}", i), 1.0, 1.0))
        .collect();
    assert!(run_strategy(Strategy::Exhaustive, &candidates, 5.0).is_err());
    assert!(run_strategy(Strategy::Greedy, &candidates, 5.0).is_ok());
}

#[test]
fn test_format_selection() {
    assert_eq!(
        format_selection(&Selection::new()),
        "*** Armor Vector ***\n[empty armor list]\n"
    );

    let catalog = vec![armor("new enchanted helmet", 120.0, 400.5), armor("boots", 15.5, 20.0)];
    let selection = Selection::from_indices(&catalog, vec![0, 1]);
    assert_eq!(
        format_selection(&selection),
        "*** Armor Vector ***\n\
         Ye olde new enchanted helmet ==> Cost of 120 gold; Defense points = 400.5\n\
         Ye olde boots ==> Cost of 15.5 gold; Defense points = 20\n\
         > Grand total cost: 135.5 gold\n\
         > Grand total defense: 420.5\n"
    );
}

#[test]
fn test_format_run() {
    let candidates = vec![armor("A", 10.0, 60.0), armor("B", 20.0, 100.0)];
    let run = run_strategy(Strategy::Exhaustive, &candidates, 10.0).unwrap();

    let text = format_run(&run, false);
    assert!(text.starts_with("exhaustive search over 2 candidates:\n*** Armor Vector ***\n"));
    assert!(text.contains("Ye olde A ==> Cost of 10 gold; Defense points = 60\n"));
    assert!(text.contains("Elapsed: "));

    let json = format_run(&run, true);
    assert_eq!(
        json,
        "{\"indices\":[0],\"items\":[{\"cost\":10.0,\"defense\":60.0,\"description\":\"A\"}],\
         \"total_cost\":10.0,\"total_defense\":60.0}\n"
    );
    let parsed: Selection = maxdefense_utils::dejsonify(json.trim_end()).unwrap();
    assert_eq!(parsed, run.selection);
}
