//! Selection-aware editing operations over contours and glyphs.
//!
//! These are the entry points a host editor calls in response to user
//! gestures: translate points or whole selections, delete selected
//! outline pieces, and batch edits across a glyph. Smoothness at on-curve
//! points marked smooth is enforced, not just preserved: moving a handle
//! or its anchor re-derives the opposite handle so the tangents stay
//! collinear.

use kurbo::Vec2;

use crate::contour::Contour;
use crate::error::GlyphEditError;
use crate::geometry::{extend_through, line_projection, rotate_about};
use crate::glyph::Glyph;
use crate::notification::Notification;
use crate::pen::GlyphBuilderPen;
use crate::point::PointType;
use crate::representations::{filter_selection, FILTER_SELECTION};
use crate::session::EditSession;

/// Sibling lookup for an off-curve point: for each direction where the
/// immediate neighbor is an unselected on-curve point, yield that anchor
/// together with the point one step beyond it (the opposite handle, or the
/// next anchor when the far side is straight). On open contours a pair
/// touching the contour's first point is dropped rather than wrapped.
fn offcurve_siblings(contour: &Contour, index: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for d in [-1isize, 1] {
        let sibling = contour.wrap(index as isize + d);
        if contour.points[sibling].selected {
            continue;
        }
        if contour.points[sibling].is_on_curve() {
            let second = contour.wrap(index as isize + 2 * d);
            if !contour.closed && (sibling == 0 || second == 0) {
                continue;
            }
            pairs.push((sibling, second));
        }
    }
    pairs
}

/// If the on-curve point at `index` is smooth and flanked by exactly one
/// handle and one on-curve neighbor, rotate the handle around the anchor
/// so it points exactly opposite the neighbor, keeping its length.
fn project_smooth_offcurve(contour: &mut Contour, index: usize) {
    if !contour.points[index].smooth {
        return;
    }
    if !contour.closed && (index == 0 || index == contour.len() - 1) {
        return;
    }
    let mut offcurve = None;
    let mut other = None;
    for d in [-1isize, 1] {
        let i = contour.wrap(index as isize + d);
        if contour.points[i].is_on_curve() {
            if other.is_some() {
                return;
            }
            other = Some(i);
        } else {
            if offcurve.is_some() {
                return;
            }
            offcurve = Some(i);
        }
    }
    if let (Some(offcurve), Some(other)) = (offcurve, other) {
        let anchor = contour.points[index].pos();
        let target = (contour.points[other].pos() - anchor).atan2() + std::f64::consts::PI;
        let current = (contour.points[offcurve].pos() - anchor).atan2();
        let rotated = rotate_about(anchor, contour.points[offcurve].pos(), target - current);
        contour.points[offcurve].set_pos(rotated);
    }
}

/// The single-point translation, without the dirty-flag bookkeeping.
/// Returns whether anything moved.
fn move_point_inner(contour: &mut Contour, index: usize, delta: Vec2) -> bool {
    if !contour.points[index].is_on_curve() {
        // An off-curve handle. If no unselected sibling anchor exists the
        // handle travels with its anchor's own move instead.
        let siblings = offcurve_siblings(contour, index);
        if siblings.is_empty() {
            return false;
        }
        contour.points[index].move_by(delta);
        for (anchor, other) in siblings {
            if !contour.points[anchor].smooth {
                continue;
            }
            if !contour.points[other].is_on_curve() && !contour.points[other].selected {
                // keep the opposite handle inline, preserving its length
                let anchor_pos = contour.points[anchor].pos();
                let other_len = (contour.points[other].pos() - anchor_pos).hypot();
                let inline =
                    extend_through(contour.points[index].pos(), anchor_pos, other_len);
                contour.points[other].set_pos(inline);
            } else {
                // the far side is an anchor (or moving on its own): keep
                // tangency by projecting the moved handle onto that line
                let projected = line_projection(
                    contour.points[anchor].pos(),
                    contour.points[other].pos(),
                    contour.points[index].pos(),
                );
                contour.points[index].set_pos(projected);
            }
        }
        true
    } else {
        // An on-curve point. Its handles travel with it.
        contour.points[index].move_by(delta);
        for d in [-1isize, 1] {
            if !contour.closed && index == 0 && d == -1 {
                continue;
            }
            let neighbor = contour.wrap(index as isize + d);
            if contour.points[neighbor].is_on_curve() {
                continue;
            }
            if d > 0 {
                // don't displace a handle twice when the next anchor is
                // selected and will drag it as part of its own move
                let second = contour.wrap(index as isize + 2 * d);
                let far = &contour.points[second];
                if far.is_on_curve() && far.typ != PointType::Move && far.selected {
                    continue;
                }
            }
            contour.points[neighbor].move_by(delta);
            project_smooth_offcurve(contour, index);
        }
        true
    }
}

/// Translate one point by `delta`, adjusting neighbors as the smoothness
/// rules demand, and mark the contour dirty.
pub fn move_point(
    contour: &mut Contour,
    index: usize,
    delta: Vec2,
) -> Result<(), GlyphEditError> {
    if index >= contour.len() {
        return Err(GlyphEditError::PointOutOfRange {
            index,
            count: contour.len(),
        });
    }
    if move_point_inner(contour, index, delta) {
        contour.dirty = true;
    }
    Ok(())
}

/// Translate every selected point of the contour by `delta`. Returns
/// whether anything moved.
///
/// Points are visited in ascending contour order; each adjustment reads
/// neighbors' live positions, so the order is part of the contract. The
/// dirty flag is set once for the whole batch.
pub fn move_selection(contour: &mut Contour, delta: Vec2) -> bool {
    let mut moved = false;
    for index in contour.selection() {
        moved |= move_point_inner(contour, index, delta);
    }
    if moved {
        contour.dirty = true;
    }
    moved
}

/// Delete the selected points of one contour, keeping the remaining shape
/// well formed.
///
/// Segments are processed in reverse contour order, with the segment
/// holding the contour's first point deferred to the very end so earlier
/// removals never shift the positions still to visit. Returns `true` when
/// the contour has been exhausted (fewer than two segments would remain)
/// and should be dropped by its owning glyph.
pub fn remove_selection(
    contour: &mut Contour,
    preserve_shape: bool,
) -> Result<bool, GlyphEditError> {
    let initial = contour.segments().len();
    if initial == 0 {
        return Ok(false);
    }
    let mut order: Vec<Option<usize>> = (0..initial - 1).rev().map(Some).collect();
    order.push(None); // the deferred segment, located live
    for slot in order {
        let segments = contour.segments();
        if segments.is_empty() {
            break;
        }
        let index = match slot {
            Some(i) => i,
            None => segments.len() - 1,
        };
        let segment = segments[index].clone();
        let anchor_typ = contour.points[segment.anchor].typ;
        if contour.points[segment.anchor].selected {
            if segments.len() < 2 {
                contour.points.clear();
                contour.dirty = true;
                return Ok(true);
            }
            let mut preserve = preserve_shape;
            // a straight join carries no curvature to preserve
            if anchor_typ == PointType::Line {
                preserve = false;
            }
            // no reconnection exists past the ends of an open contour
            if preserve && !contour.closed && (index == 0 || index == segments.len() - 1) {
                preserve = false;
            }
            contour.remove_segment(index, preserve)?;
        } else if segment.offcurves.len() == 1 {
            // lone trailing handle
            let offcurve = segment.offcurves[0];
            if contour.points[offcurve].selected {
                contour.remove_point(offcurve)?;
            }
        } else if segment.offcurves.len() == 2 {
            let (first, second) = (segment.offcurves[0], segment.offcurves[1]);
            if contour.points[first].selected || contour.points[second].selected {
                // losing either handle flattens the whole segment
                let other = contour.wrap(segment.anchor as isize - 3);
                let shift = |i: usize| {
                    i - [first, second].iter().filter(|&&doomed| doomed < i).count()
                };
                let anchor_after = shift(segment.anchor);
                let other_after = shift(other);
                let (hi, lo) = (first.max(second), first.min(second));
                contour.remove_point(hi)?;
                contour.remove_point(lo)?;
                contour.points[anchor_after].typ = PointType::Line;
                contour.points[anchor_after].smooth = false;
                contour.points[other_after].smooth = false;
                contour.dirty = true;
            }
        }
    }
    Ok(false)
}

/// Translate every selected element of the glyph: contour points (with the
/// smoothness rules of [`move_selection`]), anchors, components,
/// guidelines (the glyph's own and the session's font-level ones), and the
/// background image. Element kinds move independently.
pub fn move_glyph_elements(glyph: &mut Glyph, delta: Vec2, session: &mut EditSession) {
    session.notifications.hold();
    for anchor in glyph.anchors.iter_mut() {
        if anchor.selected {
            anchor.move_by(delta);
        }
    }
    let mut outline_moved = false;
    for contour in glyph.contours.iter_mut() {
        outline_moved |= move_selection(contour, delta);
    }
    if outline_moved {
        session.notifications.post(Notification::ContourChanged);
    }
    for component in glyph.components.iter_mut() {
        if component.selected {
            component.move_by(delta);
        }
    }
    for guideline in glyph
        .guidelines
        .iter_mut()
        .chain(session.font_guidelines.iter_mut())
    {
        if guideline.selected {
            guideline.move_by(delta);
        }
    }
    if let Some(image) = glyph.image.as_mut() {
        if image.selected {
            image.move_by(delta);
        }
    }
    glyph.touch();
    session.notifications.post(Notification::GlyphChanged);
    session.notifications.release();
}

/// Remove every selected element of the glyph: anchors, outline points
/// (per [`remove_selection`]), components, guidelines (glyph-owned and
/// font-level alike), and the image. Contours are visited in reverse so
/// exhausted ones can drop safely.
pub fn remove_glyph_elements(
    glyph: &mut Glyph,
    preserve_shape: bool,
    session: &mut EditSession,
) -> Result<(), GlyphEditError> {
    session.history.record(glyph.clone());
    session.notifications.hold();
    glyph.anchors.retain(|a| !a.selected);
    for index in (0..glyph.contours.len()).rev() {
        match remove_selection(&mut glyph.contours[index], preserve_shape) {
            Ok(true) => {
                glyph.contours.remove(index);
            }
            Ok(false) => {}
            Err(e) => {
                session.notifications.release();
                return Err(e);
            }
        }
    }
    glyph.components.retain(|c| !c.selected);
    glyph.guidelines.retain(|g| !g.selected);
    session.font_guidelines.retain(|g| !g.selected);
    if glyph.image.as_ref().is_some_and(|i| i.selected) {
        glyph.image = None;
    }
    glyph.touch();
    session.notifications.post(Notification::GlyphChanged);
    session.notifications.release();
    Ok(())
}

/// Cut semantics: delete the selected material wholesale.
///
/// Selection flags are inverted so the filtered representation of the
/// inverted selection yields the keep-set, the glyph is cleared, and the
/// filtered outline is replayed back through a point pen with its anchors
/// re-attached in bulk. Observers see one cleared and one changed
/// notification once the batch releases.
pub fn delete_selection(glyph: &mut Glyph, session: &mut EditSession) {
    for anchor in glyph.anchors.iter_mut() {
        anchor.selected = !anchor.selected;
    }
    for component in glyph.components.iter_mut() {
        component.selected = !component.selected;
    }
    for contour in glyph.contours.iter_mut() {
        for point in contour.points.iter_mut() {
            point.selected = !point.selected;
        }
    }
    glyph.touch();
    session.notifications.post(Notification::SelectionChanged);

    let cut = match session.representations.get(glyph, FILTER_SELECTION) {
        Some(rep) => rep.clone(),
        None => filter_selection(glyph),
    };
    log::debug!(
        "cutting glyph '{}' down to {} contour(s)",
        glyph.name,
        cut.contours.len()
    );
    session.history.record(glyph.clone());
    session.notifications.hold();
    glyph.clear();
    session.notifications.post(Notification::GlyphCleared);
    let mut pen = GlyphBuilderPen::new();
    cut.draw_points(&mut pen);
    let (contours, components) = pen.into_parts();
    glyph.contours = contours;
    glyph.components = components;
    glyph.anchors = cut.anchors;
    glyph.touch();
    session.notifications.post(Notification::GlyphChanged);
    session.notifications.release();
}

/// Clear every selection flag in the glyph and on the session's
/// font-level guidelines.
pub fn unselect_glyph_elements(glyph: &mut Glyph, session: &mut EditSession) {
    for anchor in glyph.anchors.iter_mut() {
        anchor.selected = false;
    }
    for component in glyph.components.iter_mut() {
        component.selected = false;
    }
    for contour in glyph.contours.iter_mut() {
        contour.select_all(false);
    }
    for guideline in glyph
        .guidelines
        .iter_mut()
        .chain(session.font_guidelines.iter_mut())
    {
        guideline.selected = false;
    }
    if let Some(image) = glyph.image.as_mut() {
        image.selected = false;
    }
    glyph.touch();
    session.notifications.post(Notification::SelectionChanged);
}
