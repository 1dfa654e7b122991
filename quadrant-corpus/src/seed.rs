//! Built-in seed corpus.
//!
//! Twenty short task titles, five per quadrant, in English and Polish —
//! the deployment this system grew out of served both. Operators extend
//! or replace the set through the corpus file and feedback operations.

use quadrant_core::quadrant::QuadrantId;

/// The seed examples in insertion order.
pub fn seed_examples() -> Vec<(&'static str, QuadrantId)> {
    vec![
        // Urgent and important.
        ("urgent deadline tomorrow", QuadrantId::DoNow),
        ("critical issue fix now", QuadrantId::DoNow),
        ("pilny termin jutro", QuadrantId::DoNow),
        ("krytyczny błąd do naprawienia zaraz", QuadrantId::DoNow),
        ("emergency meeting", QuadrantId::DoNow),
        // Urgent, not important.
        ("schedule call later", QuadrantId::Schedule),
        ("check emails tomorrow", QuadrantId::Schedule),
        ("zobacz maile jutro", QuadrantId::Schedule),
        ("zaplanuj spotkanie", QuadrantId::Schedule),
        ("review documents", QuadrantId::Schedule),
        // Important, not urgent.
        ("prepare report", QuadrantId::Delegate),
        ("strategize project", QuadrantId::Delegate),
        ("przygotuj raport", QuadrantId::Delegate),
        ("rozważ strategię projektu", QuadrantId::Delegate),
        ("plan future goals", QuadrantId::Delegate),
        // Neither.
        ("delete old files", QuadrantId::Delete),
        ("clean up cache", QuadrantId::Delete),
        ("usuń stare pliki", QuadrantId::Delete),
        ("wyczyść pamięć", QuadrantId::Delete),
        ("ignore spam", QuadrantId::Delete),
    ]
}
