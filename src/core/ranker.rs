use crate::domain::model::{Direction, Member, RankedMember, RankedOrder, Roster};

/// Ranks the snapshot along the direction's axis. The sort is stable, so
/// members with the same axis value keep their insertion order in every
/// direction. Members without a resolved coordinate go to `skipped`
/// instead of being sorted.
pub fn rank(snapshot: &Roster, direction: Direction) -> RankedOrder {
    let mut sortable: Vec<(f64, &Member)> = Vec::new();
    let mut skipped = Vec::new();

    for member in snapshot.iter() {
        match &member.coordinate {
            Some(coordinate) => sortable.push((direction.axis_value(coordinate), member)),
            None => skipped.push(member.name.clone()),
        }
    }

    sortable.sort_by(|(a, _), (b, _)| {
        if direction.is_descending() {
            b.total_cmp(a)
        } else {
            a.total_cmp(b)
        }
    });

    let entries = sortable
        .into_iter()
        .enumerate()
        .map(|(index, (_, member))| RankedMember {
            rank: index + 1,
            member: member.clone(),
        })
        .collect();

    RankedOrder { entries, skipped }
}
