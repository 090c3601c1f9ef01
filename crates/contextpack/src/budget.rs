//! Priority-ordered trimming against the workable budget.

use hk_domain::config::workable_budget;
use hk_domain::trace::TraceEvent;

use crate::section::{Section, HIGH_PRIORITY};
use crate::truncation;

/// Priority at or above which a section keeps the middle floor.
const MID_PRIORITY: u8 = 35;

/// Minimum units a section keeps while being trimmed.
pub fn floor_for(priority: u8) -> usize {
    if priority >= HIGH_PRIORITY {
        120
    } else if priority >= MID_PRIORITY {
        80
    } else {
        60
    }
}

/// Shrink sections until their total fits the workable budget.
///
/// Single greedy pass over the sections in ascending priority (collection
/// order among equals). Each visited section gives up at most
/// `units - floor` units and sections already at their floor are skipped.
/// Stops as soon as the overage is covered. Sections are never removed;
/// if floors alone exceed the budget the result stays over budget.
///
/// Returns new sections in the input order.
pub fn allocate(sections: &[Section], budget: usize) -> Vec<Section> {
    let workable = workable_budget(budget);
    let total: usize = sections.iter().map(Section::units).sum();

    if total <= workable {
        tracing::debug!(total, workable, "pack within budget");
        return sections.to_vec();
    }

    let mut order: Vec<usize> = (0..sections.len()).collect();
    order.sort_by_key(|&idx| sections[idx].priority);

    let mut trimmed = sections.to_vec();
    let mut over = total - workable;

    for idx in order {
        if over == 0 {
            break;
        }
        let section = &sections[idx];
        let floor = floor_for(section.priority);
        let units = section.units();
        if units <= floor {
            continue;
        }

        let cut = (units - floor).min(over);
        let target = units - cut;
        trimmed[idx] = section.with_content(truncation::truncate_to_units(&section.content, target));
        over -= cut;

        TraceEvent::SectionTrimmed {
            title: section.title.clone(),
            priority: section.priority,
            from_units: units,
            to_units: trimmed[idx].units(),
        }
        .emit();
    }

    if over > 0 {
        tracing::debug!(remaining_over = over, "floors reached, pack stays over budget");
    }

    trimmed
}
