mod debug_invariants;
