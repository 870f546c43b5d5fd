///
/// @package flag-checker
///
/// @file Flags
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use bitflags::bitflags;

bitflags! {
    /// Object flags of an Unreal package export
    #[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
    pub struct ObjectFlags: u32 {
        const TRANSACTIONAL = 1 << 0; // Supports editor undo/redo
        const UNREACHABLE = 1 << 1; // Not reachable on the object graph
        const PUBLIC = 1 << 2; // Visible outside its package
        const TAG_IMP = 1 << 3; // Temporary import tag
        const TAG_EXP = 1 << 4; // Temporary export tag
        const SOURCE_MODIFIED = 1 << 5; // Modified relative to source files
        const TAG_GARBAGE = 1 << 6; // Check during garbage collection
        const FINAL = 1 << 7;
        const PER_OBJECT_LOCALIZED = 1 << 8;
        const NEED_LOAD = 1 << 9; // During load, needs to be loaded
        const HIGHLIGHTED_NAME = 1 << 10; // Also EliminateObject, RemappedName, Protected
        const IN_SINGULAR_FUNC = 1 << 11; // Also Suppress, StateChanged
        const IN_END_STATE = 1 << 12;
        const TRANSIENT = 1 << 13; // Don't save object
        const PRELOADING = 1 << 14; // Data is being preloaded from file
        const LOAD_FOR_CLIENT = 1 << 15;
        const LOAD_FOR_SERVER = 1 << 16;
        const LOAD_FOR_EDIT = 1 << 17;
        const STANDALONE = 1 << 18; // Keep object around for editing
        const NOT_FOR_CLIENT = 1 << 19;
        const NOT_FOR_SERVER = 1 << 20;
        const NOT_FOR_EDIT = 1 << 21;
        const DESTROYED = 1 << 22; // Object destructor called
        const NEED_POST_LOAD = 1 << 23;
        const HAS_STACK = 1 << 24; // Has execution stack
        const NATIVE = 1 << 25; // Native object
        const MARKED = 1 << 26;
        const ERROR_SHUTDOWN = 1 << 27;
        const DEBUG_POST_LOAD = 1 << 28;
        const DEBUG_SERIALIZE = 1 << 29;
        const DEBUG_DESTROY = 1 << 30;
        const DEBUG_DESTROY_HIGH = 1 << 31;
    }
}

/// Display names of all known flags, sorted by ascending bit.
///
/// Several bits carry historic aliases, which are joined with a slash. The
/// two topmost bits share the same name in the enumeration dumps this table
/// was taken from and are kept that way.
pub static FLAG_TABLE: [(ObjectFlags, &str); 32] = [
    (ObjectFlags::TRANSACTIONAL, "RF_Transactional"),
    (ObjectFlags::UNREACHABLE, "RF_Unreachable"),
    (ObjectFlags::PUBLIC, "RF_Public"),
    (ObjectFlags::TAG_IMP, "RF_TagImp"),
    (ObjectFlags::TAG_EXP, "RF_TagExp"),
    (ObjectFlags::SOURCE_MODIFIED, "RF_SourceModified"),
    (ObjectFlags::TAG_GARBAGE, "RF_TagGarbage"),
    (ObjectFlags::FINAL, "RF_Final"),
    (ObjectFlags::PER_OBJECT_LOCALIZED, "RF_PerObjectLocalized"),
    (ObjectFlags::NEED_LOAD, "RF_NeedLoad"),
    (ObjectFlags::HIGHLIGHTED_NAME, "RF_HighlightedName/RF_EliminateObject/RF_RemappedName/RF_Protected"),
    (ObjectFlags::IN_SINGULAR_FUNC, "RF_InSingularFunc/RF_Suppress/RF_StateChanged"),
    (ObjectFlags::IN_END_STATE, "RF_InEndState"),
    (ObjectFlags::TRANSIENT, "RF_Transient"),
    (ObjectFlags::PRELOADING, "RF_Preloading"),
    (ObjectFlags::LOAD_FOR_CLIENT, "RF_LoadForClient"),
    (ObjectFlags::LOAD_FOR_SERVER, "RF_LoadForServer"),
    (ObjectFlags::LOAD_FOR_EDIT, "RF_LoadForEdit"),
    (ObjectFlags::STANDALONE, "RF_Standalone"),
    (ObjectFlags::NOT_FOR_CLIENT, "RF_NotForClient"),
    (ObjectFlags::NOT_FOR_SERVER, "RF_NotForServer"),
    (ObjectFlags::NOT_FOR_EDIT, "RF_NotForEdit"),
    (ObjectFlags::DESTROYED, "RF_Destroyed"),
    (ObjectFlags::NEED_POST_LOAD, "RF_NeedPostLoad"),
    (ObjectFlags::HAS_STACK, "RF_HasStack"),
    (ObjectFlags::NATIVE, "RF_Native"),
    (ObjectFlags::MARKED, "RF_Marked"),
    (ObjectFlags::ERROR_SHUTDOWN, "RF_ErrorShutdown"),
    (ObjectFlags::DEBUG_POST_LOAD, "RF_DebugPostLoad"),
    (ObjectFlags::DEBUG_SERIALIZE, "RF_DebugSerialize"),
    (ObjectFlags::DEBUG_DESTROY, "RF_DebugDestroy"),
    (ObjectFlags::DEBUG_DESTROY_HIGH, "RF_DebugDestroy"),
];

