mod show_linear_history_newest_first;
