mod compare_two_files;
