use generational_arena::Index;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Unité de travail planifiée sur la file unique du moteur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    SpawnRocket,
    AdvanceRocket(Index),
    AdvanceExplosion(Index),
}

#[derive(Debug)]
struct Entry {
    due_ms: u64,
    seq: u64,
    task: Task,
}

// Ordre inversé : BinaryHeap est un tas max, on veut la plus petite échéance
// (puis le plus petit numéro d'insertion) en tête.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl Eq for Entry {}

/// File de tâches différées, pilotée par une horloge simulée (ms).
///
/// Remplace le `after(ms, callback)` d'une boucle GUI : une tâche est
/// planifiée une fois, sans annulation possible, et s'exécute quand
/// l'horloge atteint son échéance. À échéance égale, l'ordre d'insertion
/// est respecté.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    queue: BinaryHeap<Entry>,
    now_ms: u64,
    next_seq: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Planifie `task` à `now + delay_ms`.
    ///
    /// Appelé depuis une tâche en cours, `now` est l'échéance de cette tâche :
    /// le rattrapage d'une longue frame reste exact.
    pub fn schedule_after(&mut self, delay_ms: u64, task: Task) {
        let due_ms = self.now_ms.saturating_add(delay_ms);
        self.schedule_at(due_ms, task);
    }

    pub fn schedule_at(&mut self, due_ms: u64, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry { due_ms, seq, task });
    }

    /// Prochaine échéance, si une tâche est en attente.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.peek().map(|e| e.due_ms)
    }

    /// Retire la prochaine tâche dont l'échéance est `<= horizon_ms` et avance
    /// l'horloge à cette échéance.
    pub fn pop_due(&mut self, horizon_ms: u64) -> Option<Task> {
        if self.next_due_ms()? > horizon_ms {
            return None;
        }
        let entry = self.queue.pop()?;
        self.now_ms = self.now_ms.max(entry.due_ms);
        Some(entry.task)
    }

    /// Avance l'horloge sans exécuter de tâche. L'horloge ne recule jamais.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
