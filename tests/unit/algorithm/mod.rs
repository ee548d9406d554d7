mod candidates;
