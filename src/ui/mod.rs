//! UI-focused helpers shared by callback/runtime wiring.
