mod hotkeys;
