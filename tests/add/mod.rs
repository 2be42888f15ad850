mod add_files_to_index;
