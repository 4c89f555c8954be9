mod visit_counter;
