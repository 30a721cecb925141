use crate::Run;
use maxdefense_challenges::Selection;
use maxdefense_utils::jsonify;
use std::fmt::Write;

/// Human readable listing of a selection followed by its totals.
pub fn format_selection(selection: &Selection) -> String {
    let mut out = String::from("*** Armor Vector ***\n");

    if selection.is_empty() {
        out.push_str("[empty armor list]\n");
        return out;
    }

    for armor in &selection.items {
        let _ = writeln!(
            out,
            "Ye olde {} ==> Cost of {} gold; Defense points = {}",
            armor.description(),
            armor.cost(),
            armor.defense()
        );
    }
    let _ = writeln!(out, "> Grand total cost: {} gold", selection.total_cost);
    let _ = writeln!(out, "> Grand total defense: {}", selection.total_defense);
    out
}

/// Output of one solver run: the sorted-key json of its selection when
/// `as_json` is set, otherwise a heading, the armor report and the timing.
pub fn format_run(run: &Run, as_json: bool) -> String {
    if as_json {
        return format!("{}\n", jsonify(&run.selection));
    }

    let mut out = format!(
        "{} search over {} candidates:\n",
        run.strategy, run.num_candidates
    );
    out.push_str(&format_selection(&run.selection));
    let _ = writeln!(out, "Elapsed: {} seconds", run.elapsed.as_secs_f64());
    out
}
